//! The 54-symbol facelet wire format.
//!
//! The string is six blocks of nine symbols in the order `U R F D L B`. Each
//! block is a row-major 3x3 grid whose rows and columns run along the
//! directions given by [`FaceletState::frame()`]:
//!
//! | Face | Rows increase toward | Columns increase toward |
//! |------|----------------------|-------------------------|
//! | U    | B                    | R                       |
//! | R    | U                    | B                       |
//! | F    | U                    | R                       |
//! | D    | F                    | R                       |
//! | L    | U                    | F                       |
//! | B    | U                    | L                       |

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{Cell, CubeError, Face, Facelet, Sign};

/// Facelet string of the solved cube.
pub const SOLVED_STR: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Number of facelets on the cube.
pub const FACELET_COUNT: usize = 54;

/// Row and column directions of each face block, in [`Face`] order.
const FACE_FRAMES: [(Face, Face); Face::COUNT] = [
    (Face::B, Face::R), // U
    (Face::U, Face::B), // R
    (Face::U, Face::R), // F
    (Face::F, Face::R), // D
    (Face::U, Face::F), // L
    (Face::U, Face::L), // B
];

/// Colors of all 54 stickers.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct FaceletState([Facelet; FACELET_COUNT]);
impl Default for FaceletState {
    fn default() -> Self {
        Self::solved()
    }
}
impl fmt::Debug for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FaceletState").field(&self.to_string()).finish()
    }
}
impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize())
    }
}
impl FromStr for FaceletState {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
impl TryFrom<String> for FaceletState {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}
impl From<FaceletState> for String {
    fn from(state: FaceletState) -> Self {
        state.serialize()
    }
}
impl FaceletState {
    /// Returns the solved state.
    pub fn solved() -> Self {
        let mut ret = [Face::U; FACELET_COUNT];
        for face in Face::iter() {
            ret[face.index() * 9..][..9].fill(face);
        }
        Self(ret)
    }

    /// Parses a wire string.
    ///
    /// Only the length and alphabet are checked; see
    /// [`FaceletState::check_balanced()`] for color counts.
    pub fn parse(text: &str) -> Result<Self, CubeError> {
        let len = text.chars().count();
        if len != FACELET_COUNT {
            return Err(CubeError::MalformedState(format!(
                "expected {FACELET_COUNT} facelets, got {len}"
            )));
        }
        let mut ret = [Face::U; FACELET_COUNT];
        for (i, c) in text.chars().enumerate() {
            ret[i] = Face::from_symbol(c).ok_or_else(|| {
                CubeError::MalformedState(format!("illegal symbol {c:?} at index {i}"))
            })?;
        }
        Ok(Self(ret))
    }
    /// Returns the wire string.
    pub fn serialize(&self) -> String {
        self.0.iter().map(|f| f.symbol()).collect()
    }

    /// Returns the direction that rows and columns of a face block increase
    /// toward.
    pub fn frame(face: Face) -> (Face, Face) {
        FACE_FRAMES[face.index()]
    }
    /// Returns the grid cell that shows a facelet slot.
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn slot_position(face: Face, row: usize, col: usize) -> Cell {
        assert!(row < 3 && col < 3, "facelet ({row}, {col}) out of range");
        let (row_dir, col_dir) = Self::frame(face);
        let mut ret = face.center();
        for (dir, i) in [(row_dir, row), (col_dir, col)] {
            ret[dir.axis()] = Sign::from_grid(i as u8).unwrap_or_default() * dir.sign();
        }
        ret
    }
    /// Returns the `(row, col)` of the slot on `face` shown by `cell`.
    ///
    /// Panics if `cell` is not on `face`.
    pub fn slot_at(face: Face, cell: Cell) -> (usize, usize) {
        assert_eq!(Sign::Pos, cell.along(face), "{cell} is not on face {face}");
        let (row_dir, col_dir) = Self::frame(face);
        (
            cell.along(row_dir).grid() as usize,
            cell.along(col_dir).grid() as usize,
        )
    }

    fn index(face: Face, row: usize, col: usize) -> usize {
        assert!(row < 3 && col < 3, "facelet ({row}, {col}) out of range");
        face.index() * 9 + row * 3 + col
    }
    /// Returns the color at a slot. Panics if `row` or `col` is out of range.
    pub fn get(&self, face: Face, row: usize, col: usize) -> Facelet {
        self.0[Self::index(face, row, col)]
    }
    /// Sets the color at a slot. Panics if `row` or `col` is out of range.
    pub fn set(&mut self, face: Face, row: usize, col: usize, facelet: Facelet) {
        self.0[Self::index(face, row, col)] = facelet;
    }
    /// Returns the color that `cell` shows toward `face`.
    pub fn get_at(&self, face: Face, cell: Cell) -> Facelet {
        let (row, col) = Self::slot_at(face, cell);
        self.get(face, row, col)
    }
    /// Sets the color that `cell` shows toward `face`.
    pub fn set_at(&mut self, face: Face, cell: Cell, facelet: Facelet) {
        let (row, col) = Self::slot_at(face, cell);
        self.set(face, row, col, facelet);
    }
    /// Returns the nine colors of a face, row-major.
    pub fn block(&self, face: Face) -> &[Facelet] {
        &self.0[face.index() * 9..][..9]
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| self.block(face).iter().all_equal())
    }
    /// Returns how many stickers of each color there are, in [`Face`] order.
    pub fn color_counts(&self) -> [usize; Face::COUNT] {
        let mut ret = [0; Face::COUNT];
        for f in self.0 {
            ret[f.index()] += 1;
        }
        ret
    }
    /// Returns an error unless every color appears exactly nine times.
    pub fn check_balanced(&self) -> Result<(), CubeError> {
        let counts = self.color_counts();
        if counts.iter().all(|&n| n == 9) {
            return Ok(());
        }
        let summary = Face::iter()
            .zip(counts)
            .filter(|&(_, n)| n != 9)
            .map(|(face, n)| format!("{face}={n}"))
            .join(", ");
        Err(CubeError::UnbalancedState(summary))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            FaceletState::parse("short"),
            Err(CubeError::MalformedState(_)),
        ));
        let with_x = format!("X{}", &SOLVED_STR[1..]);
        assert!(matches!(
            FaceletState::parse(&with_x),
            Err(CubeError::MalformedState(_)),
        ));
        let too_long = format!("{SOLVED_STR}U");
        assert!(FaceletState::parse(&too_long).is_err());
        assert!(FaceletState::parse(&SOLVED_STR.to_lowercase()).is_err());
    }

    #[test]
    fn test_unbalanced_is_parsed() {
        let s = "U".repeat(54);
        let state = FaceletState::parse(&s).unwrap();
        assert_eq!(s, state.serialize());
        assert!(state.is_solved());
        assert_eq!(
            Err(CubeError::UnbalancedState(
                "U=54, R=0, F=0, D=0, L=0, B=0".to_owned()
            )),
            state.check_balanced(),
        );
        assert_eq!(Ok(()), FaceletState::solved().check_balanced());
    }

    #[test]
    fn test_get_set() {
        let mut state = FaceletState::solved();
        assert_eq!(SOLVED_STR, state.serialize());
        assert!(state.is_solved());
        state.set(Face::F, 0, 2, Face::B);
        assert_eq!(Face::B, state.get(Face::F, 0, 2));
        assert_eq!(Some('B'), state.serialize().chars().nth(18 + 2));
        assert!(!state.is_solved());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_slot() {
        FaceletState::solved().get(Face::U, 3, 0);
    }

    #[test]
    fn test_slot_convention() {
        use Sign::*;

        // Row 0 of U touches F; row 0 of every side face touches D.
        assert_eq!(Cell([Neg, Pos, Pos]), FaceletState::slot_position(Face::U, 0, 0));
        assert_eq!(Cell([Neg, Neg, Pos]), FaceletState::slot_position(Face::F, 0, 0));
        assert_eq!(Cell([Pos, Neg, Pos]), FaceletState::slot_position(Face::R, 0, 0));
        assert_eq!(Cell([Pos, Neg, Neg]), FaceletState::slot_position(Face::B, 0, 0));
        assert_eq!(Cell([Neg, Neg, Neg]), FaceletState::slot_position(Face::L, 0, 0));
        assert_eq!(Cell([Neg, Neg, Neg]), FaceletState::slot_position(Face::D, 0, 0));

        for face in Face::iter() {
            for row in 0..3 {
                for col in 0..3 {
                    let cell = FaceletState::slot_position(face, row, col);
                    assert_eq!((row, col), FaceletState::slot_at(face, cell));
                }
            }
        }
    }

    #[test]
    fn test_serde_as_string() {
        let state = FaceletState::solved();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(format!("\"{SOLVED_STR}\""), json);
        assert_eq!(state, serde_json::from_str::<FaceletState>(&json).unwrap());
        assert!(serde_json::from_str::<FaceletState>("\"UUU\"").is_err());
    }
}
