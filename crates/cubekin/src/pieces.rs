//! Piece-based model of the cube.
//!
//! All 26 cubies are tracked, centers included, so that slice moves carry
//! their centers along like the physical puzzle does.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    Axis, Cell, CubeError, CubieKind, Face, FaceletState, Facelet, Move, MoveSequence,
    Orientation, QuarterTurn, Sign,
};

/// How thoroughly to check a facelet state before accepting it.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Verification {
    /// Every cubie must be a real cubie, present once, in a proper
    /// (non-mirrored) orientation, and the centers must sit as on a real
    /// core.
    Physical,
    /// Like `Physical`, and additionally the arrangement must be reachable by
    /// turning: corner twists sum to zero, edge flips sum to zero, and corner
    /// and edge permutations have equal parity.
    #[default]
    Reachable,
}

/// One of the 26 cubies.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    home: Cell,
    position: Cell,
    orientation: Orientation,
}
impl Cubie {
    fn solved(home: Cell) -> Self {
        Self {
            home,
            position: home,
            orientation: Orientation::IDENTITY,
        }
    }

    /// Returns the cell this cubie occupies when the cube is solved. This
    /// also identifies its colors.
    pub fn home(&self) -> Cell {
        self.home
    }
    /// Returns the cell this cubie currently occupies.
    pub fn position(&self) -> Cell {
        self.position
    }
    /// Returns the current grid indices, each in `0..3`.
    pub fn grid_position(&self) -> [u8; 3] {
        self.position.grid()
    }
    /// Returns the rotation from this cubie's solved orientation to its
    /// current one.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Returns whether this is a corner, edge, or center.
    pub fn kind(&self) -> CubieKind {
        self.home.kind()
    }
    /// Returns each sticker as the world direction it faces and its color.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, Facelet)> + '_ {
        self.home
            .faces()
            .map(|color| (self.orientation.apply(color), color))
    }
    /// Returns the color this cubie shows toward `dir`, if any.
    pub fn sticker_facing(&self, dir: Face) -> Option<Facelet> {
        let color = self.orientation.rev().apply(dir);
        (self.position.along(dir) == Sign::Pos && self.home.along(color) == Sign::Pos)
            .then_some(color)
    }

    fn rotate(&mut self, turn: QuarterTurn) {
        self.position = turn.transform(self.position);
        self.orientation = Orientation::from(turn) * self.orientation;
    }
}

/// The cube as 26 cubies, each with a position and orientation.
///
/// Cubies are kept sorted by home cell, so two models compare equal exactly
/// when every cubie is in the same place and orientation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceModel {
    cubies: Vec<Cubie>,
}
impl Default for PieceModel {
    fn default() -> Self {
        Self::solved()
    }
}
impl PieceModel {
    /// Returns a solved cube.
    pub fn solved() -> Self {
        Self {
            cubies: Cell::iter().sorted().map(Cubie::solved).collect(),
        }
    }
    /// Returns a cube matching a facelet state.
    pub fn from_facelets(
        state: &FaceletState,
        verification: Verification,
    ) -> Result<Self, CubeError> {
        state.check_balanced()?;

        let mut cubies = Vec::with_capacity(Cell::COUNT);
        for position in Cell::iter() {
            // (color, direction it faces)
            let stickers = position
                .faces()
                .map(|dir| (state.get_at(dir, position), dir))
                .collect_vec();

            let mut home = Cell::core();
            for &(color, _) in &stickers {
                if home[color.axis()].is_nonzero() {
                    return Err(unsolvable(format!(
                        "cubie at {position} has colors {} and {color}",
                        Face::new(color.axis(), home[color.axis()]),
                    )));
                }
                home[color.axis()] = color.sign();
            }
            let orientation = Orientation::aligning(&stickers)
                .ok_or_else(|| unsolvable(format!("cubie at {position} is mirrored")))?;
            cubies.push(Cubie {
                home,
                position,
                orientation,
            });
        }

        cubies.sort_by_key(|c| c.home);
        if let Some((a, _)) = cubies.iter().tuple_windows().find(|(a, b)| a.home == b.home) {
            let colors = a.home.faces().join("");
            return Err(unsolvable(format!("more than one {colors} cubie")));
        }

        // Centers are fixed to the core, so they must all be rotated the same.
        let center_moves = cubies
            .iter()
            .filter_map(|c| c.home.as_face().zip(c.position.as_face()))
            .collect_vec();
        let core = Orientation::aligning(&center_moves)
            .ok_or_else(|| unsolvable("centers are not arranged as on a real cube".to_owned()))?;
        for cubie in &mut cubies {
            if cubie.kind() == CubieKind::Center {
                cubie.orientation = core;
            }
        }

        let ret = Self { cubies };
        if verification == Verification::Reachable {
            ret.check_reachable(core)?;
        }
        log::debug!("loaded {state} ({verification:?})");
        Ok(ret)
    }
    /// Replaces the whole cube with one matching a facelet state. On error,
    /// nothing is changed.
    pub fn load_from_facelets(
        &mut self,
        state: &FaceletState,
        verification: Verification,
    ) -> Result<(), CubeError> {
        *self = Self::from_facelets(state, verification)?;
        Ok(())
    }

    /// Returns all cubies, sorted by home cell.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }
    /// Returns the cubie currently in `cell`, or `None` for the core.
    pub fn cubie_at(&self, cell: Cell) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position == cell)
    }
    /// Returns the cubies whose current coordinate along `axis` is `layer`.
    ///
    /// That is 9 cubies for an outer layer and 8 for a middle slice.
    pub fn select_layer(&self, axis: Axis, layer: Sign) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter().filter(move |c| c.position[axis] == layer)
    }

    /// Applies a move.
    pub fn apply_move(&mut self, m: Move) {
        let twist = m.twist();
        log::trace!("applying {m} as {twist:?}");
        let turn = twist.quarter_turn();
        for cubie in &mut self.cubies {
            if cubie.position[twist.axis] == twist.layer {
                for _ in 0..twist.quarter_turns {
                    cubie.rotate(turn);
                }
            }
        }
    }
    /// Parses and applies a move token. On error, nothing is changed.
    pub fn apply_move_str(&mut self, token: &str) -> Result<(), CubeError> {
        let m = token.parse()?;
        self.apply_move(m);
        Ok(())
    }
    /// Applies every move of a sequence in order.
    pub fn apply_sequence(&mut self, moves: &MoveSequence) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Returns the facelet state showing the current cubies.
    pub fn to_facelets(&self) -> FaceletState {
        let mut ret = FaceletState::solved();
        for cubie in &self.cubies {
            for (dir, color) in cubie.stickers() {
                ret.set_at(dir, cubie.position, color);
            }
        }
        ret
    }
    /// Returns whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        self.to_facelets().is_solved()
    }
    /// Returns an error unless the cubies occupy each cell exactly once.
    pub fn check_permutation(&self) -> Result<(), CubeError> {
        if let Some(c) = self.cubies.iter().find(|c| c.position.is_core()) {
            return Err(unsolvable(format!("cubie from {} is in the core", c.home)));
        }
        let duplicate = self
            .cubies
            .iter()
            .map(|c| c.position)
            .sorted()
            .tuple_windows()
            .find(|(a, b)| a == b);
        if let Some((cell, _)) = duplicate {
            return Err(unsolvable(format!("more than one cubie at {cell}")));
        }
        if self.cubies.len() != Cell::COUNT {
            return Err(unsolvable(format!("{} cubies", self.cubies.len())));
        }
        Ok(())
    }

    /// Checks the invariants preserved by turning, measured after undoing
    /// the rotation `core` of the centers (which only slice moves change).
    fn check_reachable(&self, core: Orientation) -> Result<(), CubeError> {
        let undo = core.rev();
        let mut twist = 0;
        let mut flips = 0;
        let mut corners = vec![];
        let mut edges = vec![];

        for cubie in &self.cubies {
            let position = undo.apply_cell(cubie.position);
            let orientation = undo * cubie.orientation;
            match cubie.kind() {
                CubieKind::Center => (),
                CubieKind::Corner => {
                    // Count steps from the U/D face to the face showing the
                    // cubie's U/D color, always going the same way around.
                    let shown = orientation.apply(Face::new(Axis::Y, cubie.home[Axis::Y]));
                    let steps = match shown.axis() {
                        Axis::Y => 0,
                        Axis::Z => 1,
                        Axis::X => 2,
                    };
                    let handedness = position.0.into_iter().fold(Sign::Pos, |a, b| a * b);
                    twist += match handedness {
                        Sign::Pos => steps,
                        _ => (3 - steps) % 3,
                    };
                    corners.push((cubie.home, position));
                }
                CubieKind::Edge => {
                    let reference_axis = |cell: Cell| match cell[Axis::Y] {
                        Sign::Zero => Axis::Z,
                        _ => Axis::Y,
                    };
                    let axis = reference_axis(cubie.home);
                    let shown = orientation.apply(Face::new(axis, cubie.home[axis]));
                    if shown.axis() != reference_axis(position) {
                        flips += 1;
                    }
                    edges.push((cubie.home, position));
                }
            }
        }

        if twist % 3 != 0 {
            return Err(unsolvable("a corner is twisted".to_owned()));
        }
        if flips % 2 != 0 {
            return Err(unsolvable("an edge is flipped".to_owned()));
        }
        if is_odd_permutation(&corners) != is_odd_permutation(&edges) {
            return Err(unsolvable("two cubies are swapped".to_owned()));
        }
        Ok(())
    }
}

fn unsolvable(reason: String) -> CubeError {
    CubeError::UnsolvablePermutation(reason)
}

/// Returns whether the permutation taking each home cell to its position is
/// odd. The homes and positions must be the same set of cells.
fn is_odd_permutation(home_to_position: &[(Cell, Cell)]) -> bool {
    let positions = home_to_position
        .iter()
        .sorted_by_key(|&&(home, _)| home)
        .map(|&(_, position)| position)
        .collect_vec();
    let inversions = positions
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count();
    inversions % 2 == 1
}
