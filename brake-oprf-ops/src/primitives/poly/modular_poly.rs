//! The base implementation of a modular polynomial, [`Poly`].
//!
//! Transparent operations forward to the underlying [`DensePolynomial`];
//! multiplication reduces by `X^[PolyConf::MAX_POLY_DEGREE] + 1`.

use std::{
    borrow::Borrow,
    marker::PhantomData,
    ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

use ark_ff::{One, Zero};
use ark_poly::polynomial::univariate::{DenseOrSparsePolynomial, DensePolynomial};

use crate::primitives::poly::PolyConf;

pub mod modulus;
pub mod mul;

use modulus::mod_poly_manual_mut;
use mul::mul_poly;

/// A modular polynomial with coefficients in [`PolyConf::Coeff`], and maximum
/// degree [`PolyConf::MAX_POLY_DEGREE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<C: PolyConf>(DensePolynomial<C::Coeff>, PhantomData<C>);

/// A coefficient sequence longer than the ring dimension was presented at a
/// trusted boundary. Impossible for values built by this crate; it guards
/// transports that reconstruct protocol messages from received bytes.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("ring element has {got} coefficients, the ring only holds {limit}")]
pub struct ShapeError {
    /// The number of coefficients presented.
    pub got: usize,
    /// The ring dimension N.
    pub limit: usize,
}

impl<C: PolyConf> Poly<C> {
    /// Converts `coeffs` into a dense polynomial.
    ///
    /// The result is not checked or reduced: raw construction must be
    /// followed by a reduction or truncation check.
    pub fn from_coefficients_vec(coeffs: Vec<C::Coeff>) -> Self {
        Self(DensePolynomial { coeffs }, PhantomData)
    }

    /// Converts `coeffs` into a dense polynomial.
    pub fn from_coefficients_slice(coeffs: &[C::Coeff]) -> Self {
        Self::from_coefficients_vec(coeffs.to_vec())
    }

    /// Converts `coeffs` into a canonical ring element, rejecting sequences
    /// longer than the ring dimension.
    pub fn try_from_coefficients_vec(coeffs: Vec<C::Coeff>) -> Result<Self, ShapeError> {
        if coeffs.len() > C::MAX_POLY_DEGREE {
            return Err(ShapeError {
                got: coeffs.len(),
                limit: C::MAX_POLY_DEGREE,
            });
        }

        let mut poly = Self::from_coefficients_vec(coeffs);
        poly.truncate_to_canonical_form();
        Ok(poly)
    }

    /// Returns the zero polynomial with `len` zero coefficients.
    ///
    /// This is not the canonical form, but it's useful for writing
    /// coefficients into a pre-sized element.
    pub fn non_canonical_zeroes(len: usize) -> Self {
        Self::from_coefficients_vec(vec![C::Coeff::zero(); len])
    }

    /// Returns `X^n`, reduced into the ring. `X^N` is `-1`.
    pub fn xn(n: usize) -> Self {
        let mut poly = Self::zero();
        poly[n] = C::Coeff::one();
        poly.reduce_mod_poly();
        poly
    }

    /// Returns coefficient `i`, zero-extended past the stored length.
    pub fn coeff(&self, i: usize) -> C::Coeff {
        self.0.coeffs.get(i).copied().unwrap_or_else(C::Coeff::zero)
    }

    /// Strips high-order zero coefficients, so that `degree()` is well-defined.
    pub fn truncate_to_canonical_form(&mut self) {
        while self.0.coeffs.last() == Some(&C::Coeff::zero()) {
            self.0.coeffs.pop();
        }
    }

    /// Reduces by `X^[PolyConf::MAX_POLY_DEGREE] + 1`, leaving the canonical form.
    pub fn reduce_mod_poly(&mut self) {
        mod_poly_manual_mut(self);
    }
}

impl<C: PolyConf> Deref for Poly<C> {
    type Target = DensePolynomial<C::Coeff>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<C: PolyConf> DerefMut for Poly<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C: PolyConf> Borrow<DensePolynomial<C::Coeff>> for Poly<C> {
    fn borrow(&self) -> &DensePolynomial<C::Coeff> {
        &self.0
    }
}

impl<C: PolyConf> From<DensePolynomial<C::Coeff>> for Poly<C> {
    fn from(poly: DensePolynomial<C::Coeff>) -> Self {
        Self(poly, PhantomData)
    }
}

impl<C: PolyConf> From<Poly<C>> for DenseOrSparsePolynomial<'static, C::Coeff> {
    fn from(poly: Poly<C>) -> DenseOrSparsePolynomial<'static, C::Coeff> {
        poly.0.into()
    }
}

impl<'a, C: PolyConf> From<&'a Poly<C>> for DenseOrSparsePolynomial<'a, C::Coeff> {
    fn from(poly: &'a Poly<C>) -> DenseOrSparsePolynomial<'a, C::Coeff> {
        (&poly.0).into()
    }
}

impl<C: PolyConf> Index<usize> for Poly<C> {
    type Output = C::Coeff;

    fn index(&self, i: usize) -> &Self::Output {
        &self.0.coeffs[i]
    }
}

impl<C: PolyConf> IndexMut<usize> for Poly<C> {
    /// Writing past the stored length zero-extends the polynomial.
    /// Raw coefficient access must be followed by a truncation check.
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        if i >= self.0.coeffs.len() {
            self.0.coeffs.resize(i + 1, C::Coeff::zero());
        }
        &mut self.0.coeffs[i]
    }
}

impl<C: PolyConf> Zero for Poly<C> {
    fn zero() -> Self {
        Self(DensePolynomial { coeffs: vec![] }, PhantomData)
    }

    fn is_zero(&self) -> bool {
        self.0.coeffs.is_empty()
    }
}

impl<C: PolyConf> One for Poly<C> {
    fn one() -> Self {
        let mut poly = Self::zero();
        poly[0] = C::Coeff::one();
        poly
    }

    fn set_one(&mut self) {
        self.0.coeffs = vec![C::Coeff::one()];
    }

    fn is_one(&self) -> bool {
        self.0.coeffs == vec![C::Coeff::one()]
    }
}

impl<C: PolyConf> Neg for Poly<C> {
    type Output = Self;

    fn neg(mut self) -> Self {
        // Negation never creates or destroys zero coefficients, so the
        // canonical form is preserved.
        for coeff in &mut self.0.coeffs {
            *coeff = -*coeff;
        }
        self
    }
}

impl<C: PolyConf> Add for Poly<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(&self.0 + &rhs.0, PhantomData)
    }
}

impl<C: PolyConf> Add<&Poly<C>> for Poly<C> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        Self(&self.0 + &rhs.0, PhantomData)
    }
}

impl<'a, 'b, C: PolyConf> Add<&'a Poly<C>> for &'b Poly<C> {
    type Output = Poly<C>;

    fn add(self, rhs: &'a Poly<C>) -> Self::Output {
        Poly(&self.0 + &rhs.0, PhantomData)
    }
}

impl<C: PolyConf> Sub for Poly<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(&self.0 - &rhs.0, PhantomData)
    }
}

impl<C: PolyConf> Sub<&Poly<C>> for Poly<C> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        Self(&self.0 - &rhs.0, PhantomData)
    }
}

impl<'a, 'b, C: PolyConf> Sub<&'a Poly<C>> for &'b Poly<C> {
    type Output = Poly<C>;

    fn sub(self, rhs: &'a Poly<C>) -> Self::Output {
        Poly(&self.0 - &rhs.0, PhantomData)
    }
}

impl<C: PolyConf> AddAssign for Poly<C> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += &rhs.0;
    }
}

impl<C: PolyConf> AddAssign<&Poly<C>> for Poly<C> {
    fn add_assign(&mut self, rhs: &Self) {
        self.0 += &rhs.0;
    }
}

impl<C: PolyConf> SubAssign for Poly<C> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= &rhs.0;
    }
}

impl<C: PolyConf> SubAssign<&Poly<C>> for Poly<C> {
    fn sub_assign(&mut self, rhs: &Self) {
        self.0 -= &rhs.0;
    }
}

// Multiplication is always the ring operation: multiply, then reduce.

impl<'a, 'b, C: PolyConf> Mul<&'a Poly<C>> for &'b Poly<C> {
    type Output = Poly<C>;

    fn mul(self, rhs: &'a Poly<C>) -> Self::Output {
        mul_poly(self, rhs)
    }
}

impl<C: PolyConf> Mul for Poly<C> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        mul_poly(&self, &rhs)
    }
}

impl<C: PolyConf> Mul<&Poly<C>> for Poly<C> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        mul_poly(&self, rhs)
    }
}
