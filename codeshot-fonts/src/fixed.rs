//! 26.6 fixed-point arithmetic for pen positions.
//!
//! All layout math stays in integer sub-pixel units so long lines do not
//! accumulate floating-point drift. Conversion to whole pixels happens only
//! where a glyph is actually painted.
//!
//! Arithmetic saturates at the `i32` range instead of wrapping, so an
//! absurdly long line pins its pen at the far edge rather than jumping back.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Sub-pixel units per pixel.
pub const UNITS_PER_PIXEL: i32 = 64;

/// A signed 26.6 fixed-point value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);

    /// Whole pixels to fixed point.
    pub const fn from_px(px: i32) -> Self {
        Fixed(px.saturating_mul(UNITS_PER_PIXEL))
    }

    /// Fractional pixels to fixed point, rounded to the nearest unit.
    pub fn from_f32(px: f32) -> Self {
        Fixed((px * UNITS_PER_PIXEL as f32).round() as i32)
    }

    /// Nearest whole pixel; halves round up.
    pub const fn round(self) -> i32 {
        self.0.saturating_add(UNITS_PER_PIXEL / 2) >> 6
    }

    pub const fn floor(self) -> i32 {
        self.0 >> 6
    }

    pub const fn ceil(self) -> i32 {
        self.0.saturating_add(UNITS_PER_PIXEL - 1) >> 6
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Mul<i32> for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: i32) -> Fixed {
        Fixed(self.0.saturating_mul(rhs))
    }
}

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Fixed>>(iter: I) -> Fixed {
        iter.fold(Fixed::ZERO, Add::add)
    }
}

/// A pen position. `y` is the text baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Fixed,
    pub y: Fixed,
}

impl Point {
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    pub const fn from_px(x: i32, y: i32) -> Self {
        Self {
            x: Fixed::from_px(x),
            y: Fixed::from_px(y),
        }
    }
}
