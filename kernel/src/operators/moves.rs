//! The twelve quarter-turns and configurable move sets.
//!
//! # Codes
//!
//! | Code | Move | Code | Move |
//! |------|------|------|------|
//! | 0    | `U`  | 6    | `B`  |
//! | 1    | `U'` | 7    | `B'` |
//! | 2    | `D`  | 8    | `L`  |
//! | 3    | `D'` | 9    | `L'` |
//! | 4    | `F`  | 10   | `R`  |
//! | 5    | `F'` | 11   | `R'` |
//!
//! Codes are `2 * face.index() + turn`, so a move and its inverse differ only
//! in the low bit.

use std::fmt;
use std::str::FromStr;

use crate::carrier::facelet::Face;
use crate::operators::apply::{ApplyFailure, MoveInput};

/// Number of legal quarter-turns.
pub const MOVE_COUNT: usize = 12;

/// Direction of a quarter-turn, as seen looking straight at the turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

impl Turn {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// A single quarter-turn: a face plus a direction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    face: Face,
    turn: Turn,
}

impl Move {
    pub const U: Self = Self::new(Face::Up, Turn::Clockwise);
    pub const U_PRIME: Self = Self::new(Face::Up, Turn::CounterClockwise);
    pub const D: Self = Self::new(Face::Down, Turn::Clockwise);
    pub const D_PRIME: Self = Self::new(Face::Down, Turn::CounterClockwise);
    pub const F: Self = Self::new(Face::Front, Turn::Clockwise);
    pub const F_PRIME: Self = Self::new(Face::Front, Turn::CounterClockwise);
    pub const B: Self = Self::new(Face::Back, Turn::Clockwise);
    pub const B_PRIME: Self = Self::new(Face::Back, Turn::CounterClockwise);
    pub const L: Self = Self::new(Face::Left, Turn::Clockwise);
    pub const L_PRIME: Self = Self::new(Face::Left, Turn::CounterClockwise);
    pub const R: Self = Self::new(Face::Right, Turn::Clockwise);
    pub const R_PRIME: Self = Self::new(Face::Right, Turn::CounterClockwise);

    /// All twelve moves in code order.
    pub const ALL: [Move; MOVE_COUNT] = [
        Self::U,
        Self::U_PRIME,
        Self::D,
        Self::D_PRIME,
        Self::F,
        Self::F_PRIME,
        Self::B,
        Self::B_PRIME,
        Self::L,
        Self::L_PRIME,
        Self::R,
        Self::R_PRIME,
    ];

    /// Construct from face and direction.
    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The turned face.
    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    /// The turn direction.
    #[must_use]
    pub const fn turn(self) -> Turn {
        self.turn
    }

    /// The move that undoes this one: same face, opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.reversed())
    }

    /// Stable numeric code in `0..12`.
    #[must_use]
    pub const fn code(self) -> u8 {
        let turn_bit = match self.turn {
            Turn::Clockwise => 0,
            Turn::CounterClockwise => 1,
        };
        (self.face as u8) * 2 + turn_bit
    }
}

impl TryFrom<u8> for Move {
    type Error = ApplyFailure;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(ApplyFailure::InvalidMove {
                input: MoveInput::Code(code),
            })
    }
}

impl FromStr for Move {
    type Err = ApplyFailure;

    /// Standard notation: a face letter, optionally followed by `'`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ApplyFailure::invalid_notation(s);
        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let turn = match chars.next() {
            None => Turn::Clockwise,
            Some('\'') => Turn::CounterClockwise,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(face, turn))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn {
            Turn::Clockwise => write!(f, "{}", self.face.letter()),
            Turn::CounterClockwise => write!(f, "{}'", self.face.letter()),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// Render a move list in standard space-separated notation.
#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse space-separated notation (e.g. `"R U R' U'"`). Empty input is an empty list.
///
/// # Errors
///
/// Returns [`ApplyFailure::InvalidMove`] for the first unparseable token.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ApplyFailure> {
    s.split_whitespace().map(str::parse::<Move>).collect()
}

/// The ordered set of moves a search may branch over.
///
/// Duplicate-free; iteration order is the expansion order used by every
/// strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSetV1 {
    moves: Vec<Move>,
}

impl MoveSetV1 {
    /// All twelve moves in code order.
    #[must_use]
    pub fn full() -> Self {
        Self {
            moves: Move::ALL.to_vec(),
        }
    }

    /// Build from any sequence, dropping repeats (first occurrence wins).
    #[must_use]
    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> Self {
        let mut out: Vec<Move> = Vec::new();
        for mv in moves {
            if !out.contains(&mv) {
                out.push(mv);
            }
        }
        Self { moves: out }
    }

    /// Moves in expansion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate moves in expansion order.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    /// True if `mv` is in the set.
    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Default for MoveSetV1 {
    fn default() -> Self {
        Self::full()
    }
}
