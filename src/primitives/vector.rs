//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};

/// A 1D vector of values.
///
/// # Examples
///
/// ```
/// use perfilar::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 1.0, 2.0]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector from a Vec.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl Vector<f32> {
    /// Minimum over the valid (non-NaN) entries.
    ///
    /// Returns `None` if every entry is NaN or the vector is empty. NaN
    /// entries are skipped by an explicit check, never by relying on
    /// float comparison semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfilar::primitives::Vector;
    ///
    /// let v = Vector::from_slice(&[3.0, f32::NAN, 1.5]);
    /// assert_eq!(v.min_finite(), Some(1.5));
    ///
    /// let all_failed = Vector::from_slice(&[f32::NAN, f32::NAN]);
    /// assert_eq!(all_failed.min_finite(), None);
    /// ```
    #[must_use]
    pub fn min_finite(&self) -> Option<f32> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                Some(m) if m <= v => Some(m),
                _ => Some(v),
            })
    }
}

impl<T> std::ops::Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}
