use serde::{Deserialize, Serialize};

/// A single (x, y) observation in a bivariate sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Independent component.
    pub x: f64,
    /// Dependent component.
    pub y: f64,
}

impl Point {
    /// Creates a new observation.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_deserializes_from_json_object() {
        let point: Point = serde_json::from_str(r#"{"x": 2.7, "y": 15.6}"#).unwrap();
        assert!((point.x - 2.7).abs() < f64::EPSILON);
        assert!((point.y - 15.6).abs() < f64::EPSILON);
    }

    #[test]
    fn point_serializes_round_trip() {
        let point = Point::new(-1.5, 3.25);
        let json = serde_json::to_string(&point).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }
}
