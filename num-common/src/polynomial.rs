//! Dense univariate polynomials
//!
//! Coefficients are stored in ascending powers: `coeffs[k]` multiplies `x^k`.
//! The type is generic over [`Float`] like the rest of the workspace's scalar
//! handling, though the tools use it with `f64`.

use num_traits::Float;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A dense polynomial with coefficients in ascending powers.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Float> {
    coeffs: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Build from ascending-power coefficients, trimming trailing zeros.
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut p = Self { coeffs };
        p.trim();
        p
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// The constant polynomial `c`.
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// The monic linear factor `x - root`.
    pub fn linear_factor(root: T) -> Self {
        Self {
            coeffs: vec![-root, T::one()],
        }
    }

    /// Degree of the polynomial; 0 for constants (including zero).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Ascending-power coefficients.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// True if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == T::zero())
    }

    /// Evaluate at `x` with Horner's scheme.
    pub fn eval(&self, x: T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Multiply every coefficient by `s`.
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.coeffs.iter().map(|&c| c * s).collect())
    }

    /// First derivative.
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| c * T::from(k).unwrap())
            .collect();
        Self::new(coeffs)
    }

    /// Subtract a constant, i.e. the polynomial `p(x) - c`.
    pub fn minus_constant(&self, c: T) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] = coeffs[0] - c;
        Self::new(coeffs)
    }

    fn trim(&mut self) {
        while self.coeffs.len() > 1 && *self.coeffs.last().unwrap() == T::zero() {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(T::zero());
        }
    }
}

impl<T: Float> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: &Polynomial<T>) -> Polynomial<T> {
        let n = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..n)
            .map(|k| {
                let a = self.coeffs.get(k).copied().unwrap_or_else(T::zero);
                let b = other.coeffs.get(k).copied().unwrap_or_else(T::zero);
                a + b
            })
            .collect();
        Polynomial::new(coeffs)
    }
}

impl<T: Float> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, other: &Polynomial<T>) -> Polynomial<T> {
        let n = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..n)
            .map(|k| {
                let a = self.coeffs.get(k).copied().unwrap_or_else(T::zero);
                let b = other.coeffs.get(k).copied().unwrap_or_else(T::zero);
                a - b
            })
            .collect();
        Polynomial::new(coeffs)
    }
}

impl<T: Float> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: &Polynomial<T>) -> Polynomial<T> {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![T::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Polynomial<T> {
    /// Renders `y = +a x^g +b x^(g-1) ... +c` in descending powers, the way
    /// the fitting tool prints its equations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, &c) in self.coeffs.iter().enumerate().rev() {
            if c == T::zero() && !(first && k == 0) {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            match k {
                0 => write!(f, "{c:+.5}")?,
                1 => write!(f, "{c:+.5}x")?,
                _ => write!(f, "{c:+.5}x^{k}")?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eval_horner() {
        // 2 - 3x + x^2
        let p = Polynomial::new(vec![2.0, -3.0, 1.0]);
        assert_relative_eq!(p.eval(0.0), 2.0);
        assert_relative_eq!(p.eval(1.0), 0.0);
        assert_relative_eq!(p.eval(2.0), 0.0);
        assert_relative_eq!(p.eval(4.0), 6.0);
    }

    #[test]
    fn test_add_mul() {
        let a = Polynomial::new(vec![1.0, 1.0]); // 1 + x
        let b = Polynomial::new(vec![-1.0, 1.0]); // -1 + x
        let sum = &a + &b;
        assert_eq!(sum.coeffs(), &[0.0, 2.0]);
        let diff = &a - &b;
        assert_eq!(diff.coeffs(), &[2.0]);
        let prod = &a * &b; // x^2 - 1
        assert_eq!(prod.coeffs(), &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_trim_and_degree() {
        let p = Polynomial::new(vec![1.0, 2.0, 0.0, 0.0]);
        assert_eq!(p.degree(), 1);
        let z = Polynomial::<f64>::new(vec![0.0, 0.0]);
        assert!(z.is_zero());
        assert_eq!(z.degree(), 0);
    }

    #[test]
    fn test_derivative() {
        // 1 + 2x + 3x^2 -> 2 + 6x
        let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(p.derivative().coeffs(), &[2.0, 6.0]);
    }

    #[test]
    fn test_linear_factor_roots() {
        let p = Polynomial::linear_factor(2.5);
        assert_relative_eq!(p.eval(2.5), 0.0);
    }

    #[test]
    fn test_display_descending() {
        let p = Polynomial::new(vec![-0.5, 0.0, 2.0]);
        assert_eq!(format!("{p}"), "+2.00000x^2 -0.50000");
    }
}
