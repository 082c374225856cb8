use crate::{Result, VectorError};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable, arbitrary-dimension vector of real components.
///
/// Two vectors are equal when their ordered components are equal; there is
/// no identity beyond that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub fn new(components: impl Into<Vec<f64>>) -> Self {
        Self {
            data: Array1::from_vec(components.into()),
        }
    }

    /// Component at `index`, or `OutOfRange` when the vector has no such component.
    pub fn at(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(VectorError::OutOfRange {
                index,
                dimension: self.count(),
            })
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Euclidean norm. Zero for the zero-dimensional vector.
    pub fn magnitude(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    pub(crate) fn data(&self) -> &Array1<f64> {
        &self.data
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components)
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self { data }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, component) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", component)?;
        }
        write!(f, "]")
    }
}
