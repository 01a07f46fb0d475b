//! The file logger receives records from the library crates.

use css_kata::{KataError, init_logger};

#[test]
fn test_logger_records_rejected_fragments() {
    let path = std::env::temp_dir().join(format!("css-kata-{}.log", std::process::id()));
    let path = path.to_string_lossy().into_owned();
    let _ = std::fs::remove_file(&path);

    init_logger(&path).unwrap();

    let err = css_kata::selector::class("x").unwrap().id("y").unwrap_err();
    assert!(matches!(err, css_kata::SelectorError::OutOfOrderFragment { .. }));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[DEBUG]"));
    assert!(contents.contains("rejected id 'y' on '.x'"));

    // a second logger cannot be installed
    let second: css_kata::Result<()> = init_logger(&path).map_err(KataError::from);
    assert!(matches!(second, Err(KataError::Logger(_))));

    let _ = std::fs::remove_file(&path);
}
