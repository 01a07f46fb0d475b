//! Small value types and JSON round-tripping.
//!
//! - [`Rectangle`]: width, height and a computed [`area`](Rectangle::area)
//! - [`serialize`] / [`deserialize`]: JSON encoding via `serde_json`, decoding
//!   into a typed shape whose methods become available on the result
//!
//! # Usage
//!
//! ```
//! use shape::{Rectangle, Revive, serialize};
//!
//! let rect = Rectangle::new(10, 20);
//! let json = serialize(&rect).unwrap();
//! let revived = Rectangle::revive(&json).unwrap();
//! assert_eq!(revived.area(), 200.0);
//! ```

pub mod error;
pub mod json;
pub mod rectangle;

pub use error::{Result, ShapeError};
pub use json::{Revive, deserialize, serialize};
pub use rectangle::Rectangle;
