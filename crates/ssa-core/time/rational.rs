//! Rational number type for exact frame rate and time base arithmetic.

use core::fmt;

/// Decimal places kept when converting a real frame rate to a [`Rational`]
const DECIMAL_PRECISION: i64 = 1_000_000;

/// A rational number represented as a numerator and denominator.
///
/// Always stored reduced with a positive denominator, so derived equality
/// compares values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Create a new rational number, or `None` when the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        Some(Self { num, den }.reduce())
    }

    /// Create a rational from an integer.
    #[must_use]
    pub const fn from_int(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Convert a finite real number, exact up to six decimal places.
    ///
    /// `23.976` becomes `2997/125`. Returns `None` for NaN, infinities and
    /// values too large for the representation.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let scaled = (value * DECIMAL_PRECISION as f64).round();
        if scaled.abs() >= i64::MAX as f64 {
            return None;
        }
        Self::new(scaled as i64, DECIMAL_PRECISION)
    }

    /// Numerator
    #[must_use]
    pub const fn num(&self) -> i64 {
        self.num
    }

    /// Denominator (always positive)
    #[must_use]
    pub const fn den(&self) -> i64 {
        self.den
    }

    /// Check if this rational is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Convert to f64.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    fn reduce(self) -> Self {
        if self.num == 0 {
            return Self { num: 0, den: 1 };
        }
        let g = gcd(self.num.unsigned_abs(), self.den.unsigned_abs()) as i64;
        Self {
            num: self.num / g,
            den: self.den / g,
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Integer division rounding half away from zero. `den` must be positive.
pub(crate) const fn div_round(num: i128, den: i128) -> i128 {
    if num >= 0 {
        num.saturating_mul(2).saturating_add(den) / (2 * den)
    } else {
        -(num.saturating_mul(-2).saturating_add(den) / (2 * den))
    }
}

/// Integer division rounding toward negative infinity. `den` must be positive.
pub(crate) const fn div_floor(num: i128, den: i128) -> i128 {
    num.div_euclid(den)
}
