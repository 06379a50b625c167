use std::collections::HashMap;

use crate::error::{GeometryError, Result};

use super::Point2;

/// Values that expose `x`/`y` accessors.
pub trait HasCoordinates {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl HasCoordinates for Point2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// The point-like shapes accepted by [`to_point`].
#[derive(Clone, Copy)]
pub enum PointInput<'a> {
    /// An `(x, y)` pair.
    Pair(f64, f64),
    /// A sequence that must hold exactly two coordinates.
    Sequence(&'a [f64]),
    /// A mapping with `"x"` and `"y"` entries.
    Mapping(&'a HashMap<String, f64>),
    /// Any value with coordinate accessors.
    Accessor(&'a dyn HasCoordinates),
}

impl From<(f64, f64)> for PointInput<'_> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Pair(x, y)
    }
}

impl From<[f64; 2]> for PointInput<'_> {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::Pair(x, y)
    }
}

impl From<Point2> for PointInput<'_> {
    fn from(p: Point2) -> Self {
        Self::Pair(p.x, p.y)
    }
}

impl<'a> From<&'a [f64]> for PointInput<'a> {
    fn from(values: &'a [f64]) -> Self {
        Self::Sequence(values)
    }
}

impl<'a> From<&'a HashMap<String, f64>> for PointInput<'a> {
    fn from(map: &'a HashMap<String, f64>) -> Self {
        Self::Mapping(map)
    }
}

impl<'a> From<&'a dyn HasCoordinates> for PointInput<'a> {
    fn from(value: &'a dyn HasCoordinates) -> Self {
        Self::Accessor(value)
    }
}

/// Normalizes a point-like input into a [`Point2`].
///
/// # Errors
///
/// Returns `GeometryError::InvalidParameter` if a sequence does not hold
/// exactly two values or a mapping lacks an `"x"` or `"y"` entry.
pub fn to_point<'a>(input: impl Into<PointInput<'a>>) -> Result<Point2> {
    match input.into() {
        PointInput::Pair(x, y) => Ok(Point2::new(x, y)),
        PointInput::Sequence(&[x, y]) => Ok(Point2::new(x, y)),
        PointInput::Sequence(values) => Err(GeometryError::InvalidParameter(format!(
            "a point needs exactly 2 coordinates, got {}",
            values.len()
        ))
        .into()),
        PointInput::Mapping(map) => match (map.get("x"), map.get("y")) {
            (Some(&x), Some(&y)) => Ok(Point2::new(x, y)),
            _ => Err(GeometryError::InvalidParameter(
                "point mapping needs both \"x\" and \"y\" entries".to_owned(),
            )
            .into()),
        },
        PointInput::Accessor(value) => Ok(Point2::new(value.x(), value.y())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Handle {
        px: f64,
        py: f64,
    }

    impl HasCoordinates for Handle {
        fn x(&self) -> f64 {
            self.px
        }

        fn y(&self) -> f64 {
            self.py
        }
    }

    #[test]
    fn pair_and_array() {
        assert_eq!(to_point((1.0, 2.0)).unwrap(), Point2::new(1.0, 2.0));
        assert_eq!(to_point([3.0, 4.0]).unwrap(), Point2::new(3.0, 4.0));
    }

    #[test]
    fn sequence_length_is_checked() {
        let ok = [5.0, 6.0];
        assert_eq!(to_point(&ok[..]).unwrap(), Point2::new(5.0, 6.0));
        let bad = [1.0, 2.0, 3.0];
        assert!(to_point(&bad[..]).is_err());
    }

    #[test]
    fn mapping_needs_both_keys() {
        let mut map = HashMap::new();
        map.insert("x".to_owned(), 7.0);
        assert!(to_point(&map).is_err());
        map.insert("y".to_owned(), 8.0);
        assert_eq!(to_point(&map).unwrap(), Point2::new(7.0, 8.0));
    }

    #[test]
    fn accessor_object() {
        let handle = Handle { px: -1.0, py: 0.5 };
        let p = to_point(&handle as &dyn HasCoordinates).unwrap();
        assert_eq!(p, Point2::new(-1.0, 0.5));
    }
}
