//! Facelet colors and face identities.
//!
//! # Canonical assignment
//!
//! | Face | Index | Color  | Letter |
//! |------|-------|--------|--------|
//! | U    | 0     | White  | `W`    |
//! | D    | 1     | Yellow | `Y`    |
//! | F    | 2     | Green  | `G`    |
//! | B    | 3     | Blue   | `B`    |
//! | L    | 4     | Orange | `O`    |
//! | R    | 5     | Red    | `R`    |
//!
//! The face index order is the fingerprint traversal order. Changing it
//! changes every fingerprint and every report digest.

use std::fmt;

/// One of the six facelet colors.
///
/// `repr(u8)` values are the canonical byte used in fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Yellow = 1,
    Green = 2,
    Blue = 3,
    Orange = 4,
    Red = 5,
}

impl Color {
    /// All colors in byte order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// Convert to the canonical byte.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Convert from the canonical byte. Returns `None` for unrecognized values.
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::White),
            1 => Some(Self::Yellow),
            2 => Some(Self::Green),
            3 => Some(Self::Blue),
            4 => Some(Self::Orange),
            5 => Some(Self::Red),
            _ => None,
        }
    }

    /// Single-letter notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::White => 'W',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Orange => 'O',
            Self::Red => 'R',
        }
    }

    /// Parse single-letter notation.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'W' => Some(Self::White),
            'Y' => Some(Self::Yellow),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'O' => Some(Self::Orange),
            'R' => Some(Self::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Fixed face identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    Up = 0,
    Down = 1,
    Front = 2,
    Back = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    /// All faces in traversal order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Position of this face in [`Face::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color every facelet of this face carries in the solved state.
    #[must_use]
    pub const fn canonical_color(self) -> Color {
        match self {
            Self::Up => Color::White,
            Self::Down => Color::Yellow,
            Self::Front => Color::Green,
            Self::Back => Color::Blue,
            Self::Left => Color::Orange,
            Self::Right => Color::Red,
        }
    }

    /// Face letter used in move notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Front => 'F',
            Self::Back => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Parse a face letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'F' => Some(Self::Front),
            'B' => Some(Self::Back),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
