use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: impl Into<f64>, height: impl Into<f64>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// `width * height`, computed on every call so it tracks field changes.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_follows_mutation() {
        let mut rect = Rectangle::new(2, 3);
        assert_eq!(rect.area(), 6.0);
        rect.height = 5.0;
        assert_eq!(rect.area(), 10.0);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Rectangle::default().area(), 0.0);
    }
}
