//! Axes, faces, and grid cells of a 3x3x3 cube.
//!
//! World axes follow the usual right-handed convention: X points toward the
//! R face, Y toward the U face, and Z toward the F face.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::Sign;

/// A 3-dimensional axis.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis (toward R).
    X = 0,
    /// Y axis (toward U).
    Y = 1,
    /// Z axis (toward F).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}
impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub fn int(self) -> usize {
        self as usize
    }
    /// Returns the two other axes `(a, b)` in right-handed cyclic order, so
    /// that a positive quarter turn about `self` carries `a` onto `b`.
    pub fn plane(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// A face of the cube, or equivalently one of the six outward directions.
///
/// Because every sticker of a solved cube has the color of the face it lies
/// on, the same enum names sticker colors. Variants are declared in wire
/// block order.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Face {
    /// Up (+Y).
    U = 0,
    /// Right (+X).
    R = 1,
    /// Front (+Z).
    F = 2,
    /// Down (-Y).
    D = 3,
    /// Left (-X).
    L = 4,
    /// Back (-Z).
    B = 5,
}

/// A sticker color. Colors are named after the face they belong to when the
/// cube is solved.
pub type Facelet = Face;

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Neg for Face {
    type Output = Face;
    fn neg(self) -> Face {
        self.opposite()
    }
}
impl Mul<Sign> for Face {
    type Output = Face;
    fn mul(self, rhs: Sign) -> Face {
        Face::new(self.axis(), self.sign() * rhs)
    }
}
impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// Returns the face on the given axis with the given sign. Panics if given
    /// `Sign::Zero`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Face::R,
            (Axis::X, Sign::Neg) => Face::L,
            (Axis::Y, Sign::Pos) => Face::U,
            (Axis::Y, Sign::Neg) => Face::D,
            (Axis::Z, Sign::Pos) => Face::F,
            (Axis::Z, Sign::Neg) => Face::B,
            (_, Sign::Zero) => panic!("invalid sign for face"),
        }
    }
    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }
    /// Returns the sign of this face along its perpendicular axis.
    pub fn sign(self) -> Sign {
        match self {
            Face::R | Face::U | Face::F => Sign::Pos,
            Face::L | Face::D | Face::B => Sign::Neg,
        }
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        Face::new(self.axis(), -self.sign())
    }
    /// Returns the index of this face's block in the wire format.
    pub fn index(self) -> usize {
        self as usize
    }
    /// Returns the wire symbol for this face.
    pub fn symbol(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }
    /// Returns the face for a wire symbol, if there is one.
    pub fn from_symbol(c: char) -> Option<Self> {
        Face::iter().find(|f| f.symbol() == c)
    }
    /// Returns the cell at the center of this face.
    pub fn center(self) -> Cell {
        let mut ret = Cell::core();
        ret[self.axis()] = self.sign();
        ret
    }
}

/// Kind of cubie, determined by how many stickers it carries.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CubieKind {
    /// One sticker. Centers only ever spin in place or travel with a middle
    /// slice.
    Center,
    /// Two stickers.
    Edge,
    /// Three stickers.
    Corner,
}

/// A cell of the 3x3x3 grid, in center-relative coordinates.
///
/// `Cell([x, y, z])` with each coordinate in `{-1, 0, 1}`. Grid indices in
/// `{0, 1, 2}` are available via [`Cell::grid()`].
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Cell(pub [Sign; 3]);
impl Index<Axis> for Cell {
    type Output = Sign;
    fn index(&self, axis: Axis) -> &Sign {
        &self.0[axis.int()]
    }
}
impl IndexMut<Axis> for Cell {
    fn index_mut(&mut self, axis: Axis) -> &mut Sign {
        &mut self.0[axis.int()]
    }
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.grid();
        write!(f, "({x}, {y}, {z})")
    }
}
impl Cell {
    /// Number of cells other than the core.
    pub const COUNT: usize = 26;

    /// Returns the cell at the center of the puzzle, which holds no cubie.
    pub fn core() -> Self {
        Self([Sign::Zero; 3])
    }
    /// Returns whether this is the core.
    pub fn is_core(self) -> bool {
        self == Self::core()
    }
    /// Returns the grid indices of this cell, each in the range `0..3`.
    pub fn grid(self) -> [u8; 3] {
        self.0.map(Sign::grid)
    }
    /// Returns the cell at some grid indices, or `None` if any index is out of
    /// range.
    pub fn from_grid([x, y, z]: [u8; 3]) -> Option<Self> {
        Some(Self([
            Sign::from_grid(x)?,
            Sign::from_grid(y)?,
            Sign::from_grid(z)?,
        ]))
    }
    /// Returns the coordinate of this cell along `face`'s axis, measured in
    /// `face`'s direction.
    pub fn along(self, face: Face) -> Sign {
        self[face.axis()] * face.sign()
    }
    /// Returns the number of stickers a cubie in this cell shows.
    pub fn sticker_count(self) -> usize {
        self.0.iter().map(|s| s.abs()).sum()
    }
    /// Returns the kind of cubie that belongs in this cell. Panics on the
    /// core.
    pub fn kind(self) -> CubieKind {
        match self.sticker_count() {
            1 => CubieKind::Center,
            2 => CubieKind::Edge,
            3 => CubieKind::Corner,
            _ => panic!("the core holds no cubie"),
        }
    }
    /// Returns the face whose center this is, if it is a center.
    pub fn as_face(self) -> Option<Face> {
        (self.sticker_count() == 1)
            .then(|| self.faces().next())
            .flatten()
    }
    /// Returns the outward faces that this cell touches.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Axis::iter()
            .filter(move |&axis| self[axis].is_nonzero())
            .map(move |axis| Face::new(axis, self[axis]))
    }
    /// Returns an iterator over all 26 cells other than the core, in grid
    /// order with X varying fastest.
    pub fn iter() -> impl Clone + Iterator<Item = Self> {
        Sign::iter()
            .flat_map(|z| Sign::iter().map(move |y| (y, z)))
            .flat_map(|(y, z)| Sign::iter().map(move |x| Self([x, y, z])))
            .filter(|c| !c.is_core())
    }
}
