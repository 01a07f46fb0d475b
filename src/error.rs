use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Selector error: {0}")]
    Selector(#[from] selector::SelectorError),

    #[error("Shape error: {0}")]
    Shape(#[from] shape::ShapeError),

    #[error("Logger was already initialised")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, KataError>;
