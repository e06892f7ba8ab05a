// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Tolerance-Aware Comparisons and Modular Arithmetic
//!
//! Guidance-band computations mix values produced by trigonometry, time
//! bisection and modular wrapping; comparing them with raw `<` / `==`
//! produces spurious hairline bands at segment boundaries. Every ordering
//! decision in this workspace therefore goes through the `almost_*`
//! predicates below, which treat values within an absolute tolerance as
//! equal.
//!
//! The generic versions take the tolerance explicitly; the `f64` wrappers
//! are bound to [`DEFAULT_TOLERANCE`] and are the ones the rest of the
//! workspace uses.

use num_traits::Float;

/// Absolute tolerance used by the `f64` comparison wrappers.
///
/// Values are SI quantities (meters, meters per second, radians, seconds);
/// 1e-8 is far below any physically meaningful difference in all of them
/// while sitting far above accumulated rounding error of the band
/// arithmetic.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-8;

/// Returns `true` if `a` and `b` differ by at most `tolerance`.
///
/// # Examples
///
/// ```
/// use daa_bands_core::numeric::within_tolerance;
/// assert!(within_tolerance(1.0_f64, 1.0 + 1e-12, 1e-9));
/// assert!(!within_tolerance(1.0_f64, 1.1, 1e-9));
/// ```
#[inline]
pub fn within_tolerance<F: Float>(a: F, b: F, tolerance: F) -> bool {
    (a - b).abs() <= tolerance
}

/// Maps `val` into `[0, m)` for `m > 0`; identity when `m` is zero.
///
/// # Examples
///
/// ```
/// use daa_bands_core::numeric::modulo;
/// assert_eq!(modulo(370.0_f64, 360.0), 10.0);
/// assert_eq!(modulo(-10.0_f64, 360.0), 350.0);
/// assert_eq!(modulo(360.0_f64, 360.0), 0.0);
/// assert_eq!(modulo(42.0_f64, 0.0), 42.0);
/// ```
#[inline]
pub fn modulo<F: Float>(val: F, m: F) -> F {
    if m > F::zero() {
        val - m * (val / m).floor()
    } else {
        val
    }
}

/// `a == b` within [`DEFAULT_TOLERANCE`].
#[inline]
pub fn almost_equals(a: f64, b: f64) -> bool {
    within_tolerance(a, b, DEFAULT_TOLERANCE)
}

/// `a <= b`, treating values within tolerance as equal.
#[inline]
pub fn almost_leq(a: f64, b: f64) -> bool {
    a <= b || almost_equals(a, b)
}

/// `a >= b`, treating values within tolerance as equal.
#[inline]
pub fn almost_geq(a: f64, b: f64) -> bool {
    a >= b || almost_equals(a, b)
}

/// `a < b` beyond tolerance.
#[inline]
pub fn almost_less(a: f64, b: f64) -> bool {
    a < b && !almost_equals(a, b)
}

/// `a > b` beyond tolerance.
#[inline]
pub fn almost_greater(a: f64, b: f64) -> bool {
    a > b && !almost_equals(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_within_tolerance() {
        assert!(almost_equals(1.0, 1.0));
        assert!(almost_equals(1.0, 1.0 + 0.5e-8));
        assert!(!almost_equals(1.0, 1.0 + 1.0e-7));
    }

    #[test]
    fn ordering_predicates_agree_with_equality() {
        let a = 2.0;
        let b = a + 0.5e-8; // within tolerance
        assert!(almost_leq(a, b));
        assert!(almost_leq(b, a));
        assert!(almost_geq(b, a));
        assert!(!almost_less(a, b));
        assert!(!almost_greater(b, a));

        let c = a + 1.0; // clearly apart
        assert!(almost_less(a, c));
        assert!(almost_greater(c, a));
        assert!(!almost_leq(c, a));
    }

    #[test]
    fn modulo_wraps_into_period() {
        assert_eq!(modulo(725.0, 360.0), 5.0);
        assert_eq!(modulo(-355.0, 360.0), 5.0);
        assert!(modulo(359.999, 360.0) < 360.0);
    }

    #[test]
    fn modulo_zero_period_is_identity() {
        assert_eq!(modulo(-17.5, 0.0), -17.5);
    }
}
