use std::fmt;

use itertools::Itertools;
use serde::Serialize;

/// A possibly partially known tensor shape.
///
/// `dims` is `None` when even the rank is unknown. Inside a known rank, a `None`
/// dimension is unknown (typically a batch dimension).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Shape {
    dims: Option<Vec<Option<usize>>>,
}

impl Shape {
    pub fn unknown() -> Shape {
        Shape { dims: None }
    }

    pub fn scalar() -> Shape {
        Shape { dims: Some(vec![]) }
    }

    pub fn from_dims(dims: impl IntoIterator<Item = Option<usize>>) -> Shape {
        Shape { dims: Some(dims.into_iter().collect()) }
    }

    pub fn concrete(dims: &[usize]) -> Shape {
        Shape::from_dims(dims.iter().map(|d| Some(*d)))
    }

    /// Build from signed sizes, where any negative size means "unknown".
    pub fn from_signed(dims: impl IntoIterator<Item = i64>) -> Shape {
        Shape::from_dims(dims.into_iter().map(|d| if d < 0 { None } else { Some(d as usize) }))
    }

    pub fn rank(&self) -> Option<usize> {
        self.dims.as_ref().map(|d| d.len())
    }

    pub fn dims(&self) -> Option<&[Option<usize>]> {
        self.dims.as_deref()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dims {
            None => f.write_str("<unknown>"),
            Some(dims) => write!(
                f,
                "[{}]",
                dims.iter()
                    .map(|d| d.map(|d| d.to_string()).unwrap_or_else(|| "?".to_string()))
                    .join(",")
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Shape::concrete(&[1, 256, 256, 3]).to_string(), "[1,256,256,3]");
        assert_eq!(Shape::from_signed([-1, 224, 224, 3]).to_string(), "[?,224,224,3]");
        assert_eq!(Shape::scalar().to_string(), "[]");
        assert_eq!(Shape::unknown().to_string(), "<unknown>");
    }

    #[test]
    fn rank() {
        assert_eq!(Shape::unknown().rank(), None);
        let partial = Shape::from_signed([-1, 3]);
        assert_eq!(partial.rank(), Some(2));
        assert_eq!(partial.dims(), Some(&[None, Some(3)][..]));
    }
}
