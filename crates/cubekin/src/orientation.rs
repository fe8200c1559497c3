//! Exact rotation algebra for cubies.
//!
//! Everything here is derived from [`QuarterTurn::transform()`], the one
//! coordinate formula for a quarter turn. Rotations of a cubie are signed
//! permutations of the axes, so no floating point is involved.

use std::ops::{Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{Axis, Cell, Face, Sign};

lazy_static! {
    /// All 24 proper rotations of the cube, in order of increasing number of
    /// quarter turns needed to reach them from the identity.
    static ref ROTATIONS: Vec<Orientation> = {
        let generators = Axis::iter()
            .flat_map(|axis| [Sign::Pos, Sign::Neg].map(|sign| QuarterTurn::new(axis, sign)))
            .map(Orientation::from)
            .collect::<Vec<_>>();
        let mut ret = vec![Orientation::IDENTITY];
        let mut i = 0;
        while i < ret.len() {
            let current = ret[i];
            for &g in &generators {
                let next = g * current;
                if !ret.contains(&next) {
                    ret.push(next);
                }
            }
            i += 1;
        }
        ret
    };
}

/// A 90-degree rotation about a world axis.
///
/// `Sign::Pos` is the right-hand rule: viewed from the positive end of the
/// axis looking toward the origin, the rotation is counterclockwise.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct QuarterTurn {
    /// Axis of rotation.
    pub axis: Axis,
    /// Direction of rotation.
    pub sign: Sign,
}
impl QuarterTurn {
    /// Returns a quarter turn about `axis`. Panics if given `Sign::Zero`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        assert!(sign.is_nonzero(), "quarter turn needs a direction");
        Self { axis, sign }
    }
    /// Returns the quarter turn in the other direction.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.axis, -self.sign)
    }
    /// Rotates a grid cell.
    ///
    /// A positive turn about X maps `(y, z)` to `(-z, y)`; about Y, `(z, x)`
    /// to `(-x, z)`; about Z, `(x, y)` to `(-y, x)`. A negative turn is the
    /// inverse.
    pub fn transform(self, cell: Cell) -> Cell {
        let (a, b) = self.axis.plane();
        let mut ret = cell;
        match self.sign {
            Sign::Pos => {
                ret[a] = -cell[b];
                ret[b] = cell[a];
            }
            Sign::Neg => {
                ret[a] = cell[b];
                ret[b] = -cell[a];
            }
            Sign::Zero => unreachable!("quarter turn without direction"),
        }
        ret
    }
    /// Rotates a direction.
    pub fn transform_face(self, face: Face) -> Face {
        let (a, b) = self.axis.plane();
        let axis = match face.axis() {
            ax if ax == a => b,
            ax if ax == b => a,
            ax => ax,
        };
        Face::new(axis, self.transform(face.center())[axis])
    }
}

/// Orientation of a cubie, or a rotation that can be applied to one.
///
/// `orientation[axis]` is the world direction that the cubie's own `+axis`
/// direction currently points toward. The identity maps X to R, Y to U, and
/// Z to F.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orientation([Face; 3]);
impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
impl Index<Axis> for Orientation {
    type Output = Face;
    fn index(&self, axis: Axis) -> &Face {
        &self.0[axis.int()]
    }
}
impl IndexMut<Axis> for Orientation {
    fn index_mut(&mut self, axis: Axis) -> &mut Face {
        &mut self.0[axis.int()]
    }
}
impl Mul<Orientation> for Orientation {
    type Output = Self;
    /// Composes two rotations; `rhs` is applied first.
    fn mul(self, rhs: Self) -> Self {
        Self(rhs.0.map(|face| self.apply(face)))
    }
}
impl From<QuarterTurn> for Orientation {
    fn from(turn: QuarterTurn) -> Self {
        Self([Face::R, Face::U, Face::F].map(|face| turn.transform_face(face)))
    }
}
impl Orientation {
    /// Rotation that leaves everything in place.
    pub const IDENTITY: Self = Self([Face::R, Face::U, Face::F]);

    /// Returns all 24 proper rotations, starting with the identity.
    pub fn all() -> &'static [Orientation] {
        &ROTATIONS
    }
    /// Returns the first rotation (fewest quarter turns from the identity)
    /// that carries every `from` direction onto its `to` direction, or `None`
    /// if only a reflection could do so.
    pub fn aligning(pairs: &[(Face, Face)]) -> Option<Self> {
        ROTATIONS
            .iter()
            .find(|rot| pairs.iter().all(|&(from, to)| rot.apply(from) == to))
            .copied()
    }

    /// Returns the inverse rotation.
    #[must_use]
    pub fn rev(self) -> Self {
        let mut ret = Self::IDENTITY;
        for axis in Axis::iter() {
            ret[self[axis].axis()] = Face::new(axis, self[axis].sign());
        }
        ret
    }
    /// Rotates a direction.
    pub fn apply(self, face: Face) -> Face {
        self[face.axis()] * face.sign()
    }
    /// Rotates a grid cell about the core.
    pub fn apply_cell(self, cell: Cell) -> Cell {
        let mut ret = Cell::core();
        for face in cell.faces() {
            let image = self.apply(face);
            ret[image.axis()] = image.sign();
        }
        ret
    }
    /// Returns the rotation as a row-major integer matrix acting on column
    /// vectors.
    pub fn matrix(self) -> [[i8; 3]; 3] {
        let mut ret = [[0; 3]; 3];
        for axis in Axis::iter() {
            let image = self[axis];
            ret[image.axis().int()][axis.int()] = image.sign().int();
        }
        ret
    }
}
