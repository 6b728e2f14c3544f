//! Q16.16 fixed-point number: a 32-bit signed integer holding `value * 2^16`.
//!
//! All arithmetic wraps on overflow and every narrowing step truncates.
//! Converting back to an integer is an arithmetic right shift, which rounds
//! toward negative infinity (`-0.5` becomes `-1`).

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

const FRACTIONAL_BITS: u32 = 16;
const ONE_RAW: i32 = 1 << FRACTIONAL_BITS;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(ONE_RAW);

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Bits above the integer range are shifted out.
    pub const fn from_int(value: i32) -> Self {
        Self(value << FRACTIONAL_BITS)
    }

    /// Host-side convenience (frame deltas, tests). Truncates toward zero.
    pub fn from_f32(value: f32) -> Self {
        Self((value * ONE_RAW as f32) as i32)
    }

    pub const fn to_int(self) -> i32 {
        self.0 >> FRACTIONAL_BITS
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / ONE_RAW as f32
    }

    pub const fn abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    /// `None` when `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }

        Some(Self((((self.0 as i64) << FRACTIONAL_BITS) / rhs.0 as i64) as i32))
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Fixed {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(((self.0 as i64 * rhs.0 as i64) >> FRACTIONAL_BITS) as i32)
    }
}

impl Div for Fixed {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when `rhs` is zero. Use [`Fixed::checked_div`] to guard.
    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Some(quotient) => quotient,
            None => panic!("fixed-point division by zero ({self} / 0)"),
        }
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn integer_round_trip() {
        for n in (-32768..=32767).step_by(7) {
            assert_eq!(n, Fixed::from_int(n).to_int());
        }
        assert_eq!(32767, Fixed::from_int(32767).to_int());
        assert_eq!(-32768, Fixed::from_int(-32768).to_int());
    }

    #[test]
    fn to_int_floors_negative_fractions() {
        assert_eq!(-1, Fixed::from_f32(-0.5).to_int());
        assert_eq!(0, Fixed::from_f32(0.5).to_int());
        assert_eq!(-2, Fixed::from_f32(-1.25).to_int());
    }

    #[test]
    fn from_f32_truncates() {
        assert_eq!(0x0001_8000, Fixed::from_f32(1.5).raw());
        assert_eq!(1, Fixed::from_f32(0.000_02).raw());
        assert_eq!(-1, Fixed::from_f32(-0.000_02).raw());
    }

    #[test]
    fn add_and_sub_work_on_raw_values() {
        let a = Fixed::from_f32(2.25);
        let b = Fixed::from_f32(0.5);

        assert_eq!(Fixed::from_f32(2.75), a + b);
        assert_eq!(Fixed::from_f32(1.75), a - b);
    }

    #[test]
    fn addition_wraps_silently() {
        let max = Fixed::from_raw(i32::MAX);

        assert_eq!(Fixed::from_raw(i32::MIN), max + Fixed::from_raw(1));
    }

    #[test]
    fn multiplication_widens_then_shifts() {
        let speed = Fixed::from_int(100);
        let dt = Fixed::from_f32(0.016);

        assert_eq!((100 * dt.raw() as i64) as i32, (speed * dt).raw());
        assert_eq!(Fixed::from_int(-6), Fixed::from_int(2) * Fixed::from_int(-3));
        assert_eq!(
            Fixed::from_f32(0.25),
            Fixed::from_f32(0.5) * Fixed::from_f32(0.5)
        );
    }

    #[test]
    fn division_keeps_fraction() {
        assert_eq!(Fixed::from_f32(0.5), Fixed::ONE / Fixed::from_int(2));
        assert_eq!(Fixed::from_f32(-1.5), Fixed::from_int(-3) / Fixed::from_int(2));
        assert_eq!(Fixed::from_int(4), Fixed::from_int(2) / Fixed::from_f32(0.5));
    }

    #[test]
    fn checked_division_by_zero_is_none() {
        assert_matches!(Fixed::ONE.checked_div(Fixed::ZERO), None);
        assert_matches!(Fixed::ONE.checked_div(Fixed::ONE), Some(Fixed::ONE));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_by_zero_panics() {
        let _ = Fixed::ONE / Fixed::ZERO;
    }

    #[test]
    fn comparison_uses_raw_values() {
        assert!(Fixed::from_f32(-0.5) < Fixed::ZERO);
        assert!(Fixed::from_f32(1.01) > Fixed::ONE);
        assert_eq!(Fixed::from_int(3), Fixed::from_int(3));
    }
}
