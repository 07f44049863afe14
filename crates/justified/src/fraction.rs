//! Rational number type for exact layout rounding.
//!
//! Aspect fits and justification both compute `round(a * b / c)`. Doing that
//! in floating point lets `x.5` boundaries land on either side depending on
//! the order of operations; Fraction keeps numerator and denominator apart so
//! every rounding in the layout is decided on the exact value.
//!
//! Operands are pixel counts (`u32`) or sums of them, so numerators and
//! denominators are held as `i128`: a product of two `u32` values plus a
//! rounding offset always fits.

use std::ops::{Add, Mul};

use crate::item::Size;

/// A rational number (fraction) for precise arithmetic.
///
/// # Example
///
/// ```
/// use justified::Fraction;
///
/// // 400x300 photo fitted to a 249px row: 400 * 249 / 300 = 332
/// let width = Fraction::new(400 * 249, 300);
/// assert_eq!(width.round(), 332);
///
/// // Halves round up
/// assert_eq!(Fraction::new(5, 2).round(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    num: i128,
    den: i128,
}

impl Fraction {
    /// Zero as a fraction (0/1).
    pub const ZERO: Fraction = Fraction { num: 0, den: 1 };

    /// One as a fraction (1/1).
    pub const ONE: Fraction = Fraction { num: 1, den: 1 };

    /// Create a new fraction, automatically reduced to lowest terms.
    ///
    /// Handles negative denominators by moving sign to numerator.
    /// Returns ZERO if denominator is zero.
    pub fn new(num: i128, den: i128) -> Self {
        if den == 0 {
            return Self::ZERO;
        }
        let g = gcd(num.abs(), den.abs());
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: (sign * den / g).abs(),
        }
    }

    /// Integer part (floor division).
    ///
    /// For negative fractions, rounds toward negative infinity.
    pub fn floor(&self) -> i128 {
        if self.num >= 0 {
            self.num / self.den
        } else {
            // For negative: -7/3 = -3 (not -2)
            (self.num - self.den + 1) / self.den
        }
    }

    /// Nearest integer, with halves rounding toward positive infinity.
    pub fn round(&self) -> i128 {
        (*self + Fraction::new(1, 2)).floor()
    }

    /// Rounds to a pixel count, clamping negative values to zero.
    pub fn to_pixels(&self) -> u32 {
        self.round().clamp(0, u32::MAX as i128) as u32
    }

    /// True if this fraction equals one.
    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl From<u32> for Fraction {
    fn from(n: u32) -> Self {
        Fraction::new(n as i128, 1)
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Fraction::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

/// Width of `intrinsic` once scaled to `height`, preserving its aspect ratio.
///
/// Returns `None` when either intrinsic dimension is unknown (zero), in which
/// case the item must not be rescaled at all.
pub fn scale_to_height(intrinsic: Size, height: u32) -> Option<u32> {
    if !intrinsic.is_known() {
        return None;
    }
    let width = Fraction::new(
        intrinsic.width as i128 * height as i128,
        intrinsic.height as i128,
    );
    Some(width.to_pixels())
}

/// `round(value * ratio)` in whole pixels.
pub fn scale_by(value: u32, ratio: Fraction) -> u32 {
    (ratio * Fraction::from(value)).to_pixels()
}

/// Greatest common divisor using Euclidean algorithm.
fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.max(1)
}
