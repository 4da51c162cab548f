//! `CubeStateV1`: six 3×3 facelet grids.
//!
//! # Layout
//!
//! `faces[face][row][col]`, faces in [`Face::ALL`] order, row 0 at the top and
//! col 0 at the left as seen looking straight at that face from outside.
//! U is seen with B along its top edge, D with F along its top edge, and the
//! four side faces with U along their top edge.
//!
//! # Equality semantics
//!
//! `CubeStateV1` derives `Eq` over all 54 facelets. [`Fingerprint`] is the
//! same 54 values serialized in traversal order, so
//! `a == b` iff `a.fingerprint() == b.fingerprint()`.
//!
//! Only the move engine writes facelets. Everything outside the kernel sees
//! fully populated states.

use std::fmt;

use crate::carrier::facelet::{Color, Face};

/// Number of facelets on the whole puzzle.
pub const FACELET_COUNT: usize = 54;

/// One face: `[row][col]`.
pub type FaceGrid = [[Color; 3]; 3];

/// The full puzzle state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeStateV1 {
    faces: [FaceGrid; 6],
}

impl CubeStateV1 {
    /// Create the solved state: every facelet carries its face's canonical color.
    #[must_use]
    pub fn solved() -> Self {
        let mut faces = [[[Color::White; 3]; 3]; 6];
        for face in Face::ALL {
            faces[face.index()] = [[face.canonical_color(); 3]; 3];
        }
        Self { faces }
    }

    /// True if every facelet matches its face's canonical color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|&face| {
            let want = face.canonical_color();
            self.face(face).iter().flatten().all(|&c| c == want)
        })
    }

    /// Color at `(face, row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[must_use]
    pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face.index()][row][col]
    }

    /// Borrow one face grid.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    pub(crate) fn set(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self.faces[face.index()][row][col] = color;
    }

    pub(crate) const fn faces(&self) -> &[FaceGrid; 6] {
        &self.faces
    }

    pub(crate) const fn from_faces(faces: [FaceGrid; 6]) -> Self {
        Self { faces }
    }

    /// Iterate all 54 facelets in traversal order as `(face, row, col, color)`.
    pub fn facelets(&self) -> impl Iterator<Item = (Face, usize, usize, Color)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            (0..3).flat_map(move |row| {
                (0..3).map(move |col| (face, row, col, self.faces[face.index()][row][col]))
            })
        })
    }

    /// Canonical fingerprint: the 54 color bytes in traversal order.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        let mut bytes = [0u8; FACELET_COUNT];
        for (slot, (_, _, _, color)) in bytes.iter_mut().zip(self.facelets()) {
            *slot = color.to_byte();
        }
        Fingerprint(bytes)
    }

    /// Parse the 54-letter facelet string produced by [`Fingerprint`]'s `Display`.
    ///
    /// The string must contain exactly nine of each color letter. Whether the
    /// arrangement is reachable by legal moves is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`StateParseError`] on wrong length, an unknown letter, or a
    /// color that does not appear exactly nine times.
    pub fn from_facelets(s: &str) -> Result<Self, StateParseError> {
        let letters: Vec<char> = s.chars().collect();
        if letters.len() != FACELET_COUNT {
            return Err(StateParseError::WrongLength { len: letters.len() });
        }

        let mut state = Self::solved();
        let mut counts = [0usize; 6];
        for (index, &letter) in letters.iter().enumerate() {
            let color = Color::from_letter(letter)
                .ok_or(StateParseError::UnknownColor { index, found: letter })?;
            counts[usize::from(color.to_byte())] += 1;
            let face = Face::ALL[index / 9];
            state.set(face, (index % 9) / 3, index % 3, color);
        }

        for color in Color::ALL {
            let count = counts[usize::from(color.to_byte())];
            if count != 9 {
                return Err(StateParseError::ColorCount { color, count });
            }
        }
        Ok(state)
    }
}

impl Default for CubeStateV1 {
    fn default() -> Self {
        Self::solved()
    }
}

/// Renders the unfolded net: U on top, `L F R B` across, D below.
impl fmt::Display for CubeStateV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_str = |face: Face, row: usize| -> String {
            self.face(face)[row]
                .iter()
                .map(|c| c.letter())
                .collect()
        };
        for row in 0..3 {
            writeln!(f, "    {}", row_str(Face::Up, row))?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row_str(Face::Left, row),
                row_str(Face::Front, row),
                row_str(Face::Right, row),
                row_str(Face::Back, row),
            )?;
        }
        for row in 0..3 {
            writeln!(f, "    {}", row_str(Face::Down, row))?;
        }
        Ok(())
    }
}

/// Canonical, collision-free state key.
///
/// Exactly the 54 color bytes, so it is injective by construction. Used as
/// the visited-set key in breadth-first search and as the hashed payload in
/// report digests.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint([u8; FACELET_COUNT]);

impl Fingerprint {
    /// Raw color bytes in traversal order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FACELET_COUNT] {
        &self.0
    }

    /// Lowercase hex of the raw bytes (108 chars).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            let letter = Color::from_byte(b).map_or('?', Color::letter);
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

/// Failure parsing a facelet string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateParseError {
    /// Input did not have exactly 54 letters.
    WrongLength { len: usize },
    /// A letter was not one of `W Y G B O R`.
    UnknownColor { index: usize, found: char },
    /// A color did not appear exactly nine times.
    ColorCount { color: Color, count: usize },
}

impl fmt::Display for StateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { len } => {
                write!(f, "expected {FACELET_COUNT} facelets, got {len}")
            }
            Self::UnknownColor { index, found } => {
                write!(f, "unknown color letter {found:?} at facelet {index}")
            }
            Self::ColorCount { color, count } => {
                write!(f, "color {color} appears {count} times, expected 9")
            }
        }
    }
}

impl std::error::Error for StateParseError {}
