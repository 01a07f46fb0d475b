//! JSON encoding and revival into typed shapes.
//!
//! A "shape" is simply the Rust type a document is decoded into: the decoded
//! fields become the value's data and the type's methods supply its behaviour.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Encodes `value` as compact JSON.
pub fn serialize<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    debug!("serialized {} bytes of JSON", json.len());
    Ok(json)
}

/// Decodes `json` into the shape `S`.
///
/// Fields unknown to `S` are ignored; fields `S` requires must be present.
///
/// ```rust
/// use shape::{Rectangle, deserialize};
///
/// let rect: Rectangle = deserialize(r#"{"width":4,"height":5}"#).unwrap();
/// assert_eq!(rect.area(), 20.0);
/// ```
pub fn deserialize<S>(json: &str) -> Result<S>
where
    S: DeserializeOwned,
{
    match serde_json::from_str(json) {
        Ok(value) => Ok(value),
        Err(err) => {
            debug!(
                "failed to revive {} from JSON: {err}",
                std::any::type_name::<S>()
            );
            Err(err.into())
        }
    }
}

/// Shapes that can be revived straight from JSON.
///
/// Implemented for every deserializable type, so `Rectangle::revive(json)`
/// reads the same as `deserialize::<Rectangle>(json)`.
pub trait Revive: Sized {
    fn revive(json: &str) -> Result<Self>;
}

impl<S> Revive for S
where
    S: DeserializeOwned,
{
    fn revive(json: &str) -> Result<Self> {
        deserialize(json)
    }
}
