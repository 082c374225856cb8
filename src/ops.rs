use crate::{vector::Vector, Result, VectorError};
use std::ops::{Add, Mul, Neg, Sub};

/// Greatest dimension among `vectors`, or 0 when there are none.
pub fn max_component_count(vectors: &[&Vector]) -> usize {
    vectors.iter().map(|v| v.count()).max().unwrap_or(0)
}

/// Folds the components present at each index, left to right over `vectors`.
/// A vector shorter than the result is absent at the trailing indices and
/// contributes nothing there. `fold` receives the accumulator, the input
/// position of the contributing vector, and its component.
fn fold_present<F>(vectors: &[&Vector], fold: F) -> Vector
where
    F: Fn(f64, usize, f64) -> f64,
{
    (0..max_component_count(vectors))
        .map(|i| {
            vectors
                .iter()
                .enumerate()
                .filter_map(|(n, v)| v.at(i).ok().map(|component| (n, component)))
                .fold(0.0, |acc, (n, component)| fold(acc, n, component))
        })
        .collect()
}

/// Elementwise sum of any number of vectors of possibly differing dimension.
pub fn sum(vectors: &[&Vector]) -> Vector {
    fold_present(vectors, |acc, _, component| acc + component)
}

/// Elementwise difference: at each index the first vector's component, minus
/// every later contributing component in input order.
pub fn subtract(vectors: &[&Vector]) -> Vector {
    fold_present(vectors, |acc, n, component| {
        if n == 0 {
            component
        } else {
            acc - component
        }
    })
}

pub fn scale(v: &Vector, scalar: f64) -> Vector {
    Vector::from(v.data() * scalar)
}

/// Generalized dot product: the sum over indices of the product of every
/// vector's component at that index.
///
/// All vectors must share one dimension. A vector missing a component that
/// another vector has fails the whole operation with `OutOfRange`.
pub fn dot_product(vectors: &[&Vector]) -> Result<f64> {
    let mut sum_of_products = 0.0;
    for i in 0..max_component_count(vectors) {
        let mut product = 1.0;
        for v in vectors {
            product *= v.at(i)?;
        }
        sum_of_products += product;
    }
    Ok(sum_of_products)
}

/// Standard 3D cross product. Both operands must have exactly three components.
pub fn cross_product(a: &Vector, b: &Vector) -> Result<Vector> {
    for v in [a, b] {
        if v.count() != 3 {
            return Err(VectorError::VectorNot3D(v.count()));
        }
    }
    let (a1, a2, a3) = (a.at(0)?, a.at(1)?, a.at(2)?);
    let (b1, b2, b3) = (b.at(0)?, b.at(1)?, b.at(2)?);

    Ok(Vector::new([
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ]))
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        sum(&[self, rhs])
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        subtract(&[self, rhs])
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        scale(self, scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        scale(&self, scalar)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        scale(self, -1.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_component_count() {
        let a = Vector::new([1.0]);
        let b = Vector::new([1.0, 2.0, 3.0]);
        let c = Vector::default();
        assert_eq!(max_component_count(&[&a, &b, &c]), 3);
        assert_eq!(max_component_count(&[&c]), 0);
        assert_eq!(max_component_count(&[]), 0);
    }

    #[test]
    fn test_sum_mixed_dimensions() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([10.0]);
        assert_eq!(sum(&[&a, &b]), Vector::new([11.0, 2.0, 3.0]));
    }

    #[test]
    fn test_subtract_seeds_with_first_vector() {
        let a = Vector::new([10.0, 10.0]);
        let b = Vector::new([1.0, 2.0]);
        let c = Vector::new([3.0]);
        assert_eq!(subtract(&[&a, &b, &c]), Vector::new([6.0, 8.0]));
    }

    #[test]
    fn test_subtract_first_vector_shorter() {
        let a = Vector::new([5.0]);
        let b = Vector::new([1.0, 2.0]);
        assert_eq!(subtract(&[&a, &b]), Vector::new([4.0, -2.0]));
    }

    #[test]
    fn test_subtract_single_and_empty() {
        let a = Vector::new([1.0, -2.0]);
        assert_eq!(subtract(&[&a]), a);
        assert_eq!(subtract(&[]), Vector::default());
    }

    #[test]
    fn test_dot_product_dimension_mismatch() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([1.0, 2.0]);
        assert_eq!(
            dot_product(&[&a, &b]),
            Err(VectorError::OutOfRange {
                index: 2,
                dimension: 2
            })
        );
    }

    #[test]
    fn test_dot_product_degenerate_inputs() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(dot_product(&[]), Ok(0.0));
        assert_eq!(dot_product(&[&a]), Ok(6.0));
        assert_eq!(dot_product(&[&Vector::default()]), Ok(0.0));
    }

    #[test]
    fn test_cross_product_rejects_non_3d() {
        let a = Vector::new([1.0, 2.0]);
        let b = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(cross_product(&a, &b), Err(VectorError::VectorNot3D(2)));
        assert_eq!(cross_product(&b, &a), Err(VectorError::VectorNot3D(2)));
    }

    #[test]
    fn test_cross_product_basis() {
        let x = Vector::new([1.0, 0.0, 0.0]);
        let y = Vector::new([0.0, 1.0, 0.0]);
        assert_eq!(cross_product(&x, &y).unwrap(), Vector::new([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_operators() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([4.0, 5.0, 6.0]);
        assert_eq!(&a + &b, Vector::new([5.0, 7.0, 9.0]));
        assert_eq!(&a - &b, Vector::new([-3.0, -3.0, -3.0]));
        assert_eq!(&a * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(-a.clone(), Vector::new([-1.0, -2.0, -3.0]));
        assert_eq!(a + b, Vector::new([5.0, 7.0, 9.0]));
    }
}
