use crate::error::{Result, TensorError};
use std::fmt;

/// A tensor shape, wrapping a vector of dimension sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Create a new shape from a vector of dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    /// Create a shape from a slice of dimensions.
    pub fn from_slice(dims: &[usize]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }

    /// Number of dimensions (rank).
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements. A rank-0 shape holds one element.
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns the size of dimension `i`.
    ///
    /// # Panics
    /// Panics if `i >= ndim()`.
    pub fn dim(&self, i: usize) -> usize {
        self.dims[i]
    }

    /// Returns the size of the last dimension, or `None` for a scalar shape.
    pub fn last(&self) -> Option<usize> {
        self.dims.last().copied()
    }

    /// Returns a reference to the underlying dimension sizes.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The shape with its trailing `n` dimensions removed.
    ///
    /// For `[a, b, c]`, `leading(1)` is `[a, b]` and `leading(3)` is `[]`.
    pub fn leading(&self, n: usize) -> Result<Shape> {
        if n > self.ndim() {
            return Err(TensorError::InvalidAxis {
                axis: n,
                ndim: self.ndim(),
            });
        }
        Ok(Shape::from_slice(&self.dims[..self.ndim() - n]))
    }

    /// Returns a new shape with `d` appended as the innermost dimension.
    pub fn push(&self, d: usize) -> Shape {
        let mut dims = Vec::with_capacity(self.ndim() + 1);
        dims.extend_from_slice(&self.dims);
        dims.push(d);
        Shape { dims }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape::from_slice(dims)
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Shape::from_slice(&dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_shape() {
        let s = Shape::from([128, 20]);
        assert_eq!(s.ndim(), 2);
        assert_eq!(s.numel(), 2560);
        assert_eq!(s.dim(0), 128);
        assert_eq!(s.last(), Some(20));
    }

    #[test]
    fn test_scalar_shape() {
        let s = Shape::default();
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.numel(), 1);
        assert_eq!(s.last(), None);
    }

    #[test]
    fn test_conversions() {
        let v: Shape = vec![2, 3].into();
        let s: Shape = (&[2usize, 3][..]).into();
        assert_eq!(v, s);
        assert_eq!(v, Shape::from([2, 3]));
    }

    #[test]
    fn test_leading_and_push() {
        let s = Shape::from([4, 5, 20]);
        let lead = s.leading(1).unwrap();
        assert_eq!(lead.dims(), &[4, 5]);
        assert_eq!(lead.push(40).dims(), &[4, 5, 40]);
        assert_eq!(s.leading(3).unwrap().ndim(), 0);
        assert!(matches!(
            s.leading(4),
            Err(TensorError::InvalidAxis { axis: 4, ndim: 3 })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::from([128, 40]).to_string(), "[128, 40]");
        assert_eq!(Shape::default().to_string(), "[]");
    }
}
