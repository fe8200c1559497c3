//! Sign enum, doubling as a center-relative grid coordinate.

use std::ops::{Mul, Neg};

use serde::{Deserialize, Serialize};

/// Positive, negative, or zero.
///
/// Along any axis of the cube, a cell is in the negative layer (grid index
/// 0), the middle layer (grid index 1), or the positive layer (grid index 2).
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns the grid index of the layer at this coordinate (either 0, 1,
    /// or 2).
    pub const fn grid(self) -> u8 {
        (self.int() + 1) as u8
    }
    /// Returns the coordinate for a grid index, or `None` if the index is not
    /// 0, 1, or 2.
    pub const fn from_grid(index: u8) -> Option<Sign> {
        match index {
            0 => Some(Sign::Neg),
            1 => Some(Sign::Zero),
            2 => Some(Sign::Pos),
            _ => None,
        }
    }
    /// Returns the absolute value of the integer representation of the sign
    /// (either 0 or 1).
    pub const fn abs(self) -> usize {
        match self {
            Sign::Neg | Sign::Pos => 1,
            Sign::Zero => 0,
        }
    }
    /// Returns true if `Sign::Zero` or false otherwise.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
    /// Returns false if `Sign::Zero` or true otherwise.
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Returns an iterator over all signs, in grid order.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        [Sign::Neg, Sign::Zero, Sign::Pos].into_iter()
    }
}
