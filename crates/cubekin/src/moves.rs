//! Move vocabulary and the table that gives each move its layer turn.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Axis, CubeError, Orientation, QuarterTurn, Sign};

/// Row of [`MOVE_TABLE`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveTableEntry {
    /// Move family the row describes.
    pub family: MoveFamily,
    /// Axis of rotation.
    pub axis: Axis,
    /// Coordinate of the turned layer along `axis`.
    pub layer: Sign,
    /// Direction of one plain quarter turn, by the right-hand rule.
    pub sign: Sign,
}

/// How each move family turns the cube. Rows are in [`MoveFamily`] order.
///
/// Every coordinate and sticker mapping elsewhere goes through this table and
/// [`QuarterTurn::transform()`].
pub const MOVE_TABLE: [MoveTableEntry; 9] = {
    use Axis::*;
    use MoveFamily::*;
    use Sign::*;

    const fn row(family: MoveFamily, axis: Axis, layer: Sign, sign: Sign) -> MoveTableEntry {
        MoveTableEntry {
            family,
            axis,
            layer,
            sign,
        }
    }

    [
        row(U, Y, Pos, Neg),
        row(D, Y, Neg, Pos),
        row(L, X, Neg, Pos),
        row(R, X, Pos, Neg),
        row(F, Z, Pos, Neg),
        row(B, Z, Neg, Pos),
        // Slices follow the face on their negative side, except S which
        // follows F.
        row(M, X, Zero, Pos),
        row(E, Y, Zero, Pos),
        row(S, Z, Zero, Neg),
    ]
};

/// Letter of a move, naming the layer it turns.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum MoveFamily {
    /// Up face.
    U,
    /// Down face.
    D,
    /// Left face.
    L,
    /// Right face.
    R,
    /// Front face.
    F,
    /// Back face.
    B,
    /// Middle slice between L and R.
    M,
    /// Equatorial slice between U and D.
    E,
    /// Standing slice between F and B.
    S,
}
impl fmt::Display for MoveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl MoveFamily {
    /// Returns this family's row of [`MOVE_TABLE`].
    pub fn entry(self) -> &'static MoveTableEntry {
        &MOVE_TABLE[self as usize]
    }
    /// Returns the letter for this family.
    pub fn symbol(self) -> char {
        match self {
            MoveFamily::U => 'U',
            MoveFamily::D => 'D',
            MoveFamily::L => 'L',
            MoveFamily::R => 'R',
            MoveFamily::F => 'F',
            MoveFamily::B => 'B',
            MoveFamily::M => 'M',
            MoveFamily::E => 'E',
            MoveFamily::S => 'S',
        }
    }
    /// Returns the family for a letter, if there is one.
    pub fn from_symbol(c: char) -> Option<Self> {
        MoveFamily::iter().find(|f| f.symbol() == c)
    }
}

/// How far a move turns its layer.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd,
    Ord,
)]
pub enum Amount {
    /// One quarter turn in the table direction. No suffix.
    #[default]
    Single,
    /// One quarter turn against the table direction. Suffix `'`.
    Prime,
    /// Half turn. Suffix `2`.
    Double,
}
impl Amount {
    /// Returns the suffix for this amount.
    pub fn suffix(self) -> &'static str {
        match self {
            Amount::Single => "",
            Amount::Prime => "'",
            Amount::Double => "2",
        }
    }
    /// Returns the amount that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Amount::Single => Amount::Prime,
            Amount::Prime => Amount::Single,
            Amount::Double => Amount::Double,
        }
    }
}

/// A single move token, such as `R`, `U'`, or `M2`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    /// Layer to turn.
    pub family: MoveFamily,
    /// Amount to turn it.
    pub amount: Amount,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.amount.suffix())
    }
}
impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CubeError::UnknownMove(s.to_owned());
        let mut chars = s.chars();
        let family = chars
            .next()
            .and_then(MoveFamily::from_symbol)
            .ok_or_else(unknown)?;
        let amount = match (chars.next(), chars.next()) {
            (None, _) => Amount::Single,
            (Some('\''), None) => Amount::Prime,
            (Some('2'), None) => Amount::Double,
            _ => return Err(unknown()),
        };
        Ok(Self { family, amount })
    }
}
impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
impl From<Move> for String {
    fn from(m: Move) -> Self {
        m.to_string()
    }
}
impl Move {
    /// Constructs a move.
    pub fn new(family: MoveFamily, amount: Amount) -> Self {
        Self { family, amount }
    }
    /// Returns every move in the vocabulary.
    pub fn all() -> impl Iterator<Item = Self> {
        MoveFamily::iter()
            .cartesian_product(Amount::iter().collect_vec())
            .map(|(f, a)| Self::new(f, a))
    }
    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.family, self.amount.rev())
    }
    /// Resolves this move to a layer twist using [`MOVE_TABLE`].
    pub fn twist(self) -> LayerTwist {
        let entry = self.family.entry();
        let sign = match self.amount {
            Amount::Single => entry.sign,
            Amount::Prime => -entry.sign,
            Amount::Double => Sign::Pos,
        };
        let quarter_turns = match (self.amount, sign) {
            (Amount::Double, _) => 2,
            (_, Sign::Pos) => 1,
            _ => 3,
        };
        LayerTwist {
            axis: entry.axis,
            layer: entry.layer,
            quarter_turns,
        }
    }
}

/// A move resolved to the layer it turns and by how much.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerTwist {
    /// Axis of rotation.
    pub axis: Axis,
    /// Coordinate of the turned layer along `axis`.
    pub layer: Sign,
    /// Number of positive quarter turns, from 1 to 3.
    pub quarter_turns: u8,
}
impl LayerTwist {
    /// Returns the grid index of the turned layer (0, 1, or 2).
    pub fn layer_index(self) -> u8 {
        self.layer.grid()
    }
    /// Returns the positive quarter turn that this twist repeats.
    pub fn quarter_turn(self) -> QuarterTurn {
        QuarterTurn::new(self.axis, Sign::Pos)
    }
    /// Returns the full rotation applied to cubies in the layer.
    pub fn rotation(self) -> Orientation {
        let step = Orientation::from(self.quarter_turn());
        (0..self.quarter_turns).fold(Orientation::IDENTITY, |acc, _| step * acc)
    }
}

/// What to do with a token outside the move vocabulary.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UnknownMovePolicy {
    /// Fail with [`CubeError::UnknownMove`].
    #[default]
    Reject,
    /// Drop the token and log a warning.
    Skip,
}

/// Ordered list of moves, such as a scramble or a solution.
///
/// The text form is the moves separated by spaces.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct MoveSequence(pub Vec<Move>);
impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
impl FromStr for MoveSequence {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, UnknownMovePolicy::Reject)
    }
}
impl TryFrom<String> for MoveSequence {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
impl From<MoveSequence> for String {
    fn from(seq: MoveSequence) -> Self {
        seq.to_string()
    }
}
impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}
impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
impl MoveSequence {
    /// Parses a whitespace-separated move list, handling unknown tokens
    /// according to `policy`.
    pub fn parse_with(s: &str, policy: UnknownMovePolicy) -> Result<Self, CubeError> {
        let mut moves = vec![];
        for token in s.split_whitespace() {
            match token.parse() {
                Ok(m) => moves.push(m),
                Err(e) => match policy {
                    UnknownMovePolicy::Reject => return Err(e),
                    UnknownMovePolicy::Skip => log::warn!("skipping unknown move {token:?}"),
                },
            }
        }
        Ok(Self(moves))
    }
    /// Returns the number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether there are no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Returns an iterator over the moves.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }
    /// Returns the sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|m| m.inverse()).collect()
    }
    /// Returns this sequence repeated `n` times.
    #[must_use]
    pub fn repeat(&self, n: usize) -> Self {
        Self(self.0.repeat(n))
    }
}
