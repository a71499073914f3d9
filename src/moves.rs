//! Face-turn moves and the `R U R' U'` notation scanner.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use strum::{EnumIter, FromRepr};

use crate::color::Face;

/// One of the twelve outer face quarter turns. Plain variants turn clockwise
/// as seen from outside the face.
#[derive(Debug, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Move {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
    UpPrime,
    DownPrime,
    FrontPrime,
    BackPrime,
    RightPrime,
    LeftPrime,
}

impl Move {
    pub const fn new(face: Face, prime: bool) -> Move {
        match (face, prime) {
            (Face::Up, false) => Move::Up,
            (Face::Down, false) => Move::Down,
            (Face::Front, false) => Move::Front,
            (Face::Back, false) => Move::Back,
            (Face::Right, false) => Move::Right,
            (Face::Left, false) => Move::Left,
            (Face::Up, true) => Move::UpPrime,
            (Face::Down, true) => Move::DownPrime,
            (Face::Front, true) => Move::FrontPrime,
            (Face::Back, true) => Move::BackPrime,
            (Face::Right, true) => Move::RightPrime,
            (Face::Left, true) => Move::LeftPrime,
        }
    }

    pub const fn face(self) -> Face {
        match self {
            Move::Up | Move::UpPrime => Face::Up,
            Move::Down | Move::DownPrime => Face::Down,
            Move::Front | Move::FrontPrime => Face::Front,
            Move::Back | Move::BackPrime => Face::Back,
            Move::Right | Move::RightPrime => Face::Right,
            Move::Left | Move::LeftPrime => Face::Left,
        }
    }

    #[inline]
    pub const fn is_prime(self) -> bool {
        self as u8 >= Move::UpPrime as u8
    }

    /// The move that undoes this one.
    pub const fn reverse(self) -> Move {
        Move::new(self.face(), !self.is_prime())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face().symbol())?;
        if self.is_prime() {
            write!(f, "'")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid move {found:?} at offset {offset}")]
pub struct InvalidMoveError {
    pub found: char,
    pub offset: usize,
}

/// Reads moves one at a time from notation such as `R U R' U'`.
///
/// Whitespace between moves is optional. The scanner yields one error for the
/// first character that does not start a move and then stops.
pub struct MoveScanner<'a> {
    chars: Peekable<CharIndices<'a>>,
    failed: bool,
}

impl<'a> MoveScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            failed: false,
        }
    }
}

impl Iterator for MoveScanner<'_> {
    type Item = Result<Move, InvalidMoveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (offset, found) = self.chars.find(|(_, c)| !c.is_whitespace())?;
        let Some(face) = Face::from_symbol(found) else {
            self.failed = true;
            return Some(Err(InvalidMoveError { found, offset }));
        };
        let prime = self.chars.next_if(|&(_, c)| c == '\'').is_some();
        Some(Ok(Move::new(face, prime)))
    }
}

/// Parses a whole move sequence, failing on the first invalid character.
pub fn parse_moves(text: &str) -> Result<Vec<Move>, InvalidMoveError> {
    MoveScanner::new(text).collect()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse_moves("R U R' U'"),
            Ok(vec![Move::Right, Move::Up, Move::RightPrime, Move::UpPrime])
        );
    }

    #[test]
    fn test_whitespace_is_optional() {
        assert_eq!(
            parse_moves("RUR'U'"),
            Ok(vec![Move::Right, Move::Up, Move::RightPrime, Move::UpPrime])
        );
        assert_eq!(
            parse_moves("  F\tB'\n D  "),
            Ok(vec![Move::Front, Move::BackPrime, Move::Down])
        );
        assert_eq!(parse_moves(""), Ok(vec![]));
        assert_eq!(parse_moves("   "), Ok(vec![]));
    }

    #[test]
    fn test_face_letter_at_end_is_a_move() {
        assert_eq!(parse_moves("L"), Ok(vec![Move::Left]));
        assert_eq!(parse_moves("L'"), Ok(vec![Move::LeftPrime]));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            parse_moves("R x"),
            Err(InvalidMoveError {
                found: 'x',
                offset: 2
            })
        );
        // a prime with nothing to modify
        assert_eq!(
            parse_moves("R ''"),
            Err(InvalidMoveError {
                found: '\'',
                offset: 2
            })
        );
        assert_eq!(
            parse_moves("r"),
            Err(InvalidMoveError {
                found: 'r',
                offset: 0
            })
        );
    }

    #[test]
    fn test_scanner_stops_after_error() {
        let mut scanner = MoveScanner::new("U ? D");
        assert_eq!(scanner.next(), Some(Ok(Move::Up)));
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_offset_is_in_bytes() {
        assert_eq!(
            parse_moves("é R ∆"),
            Err(InvalidMoveError {
                found: 'é',
                offset: 0
            })
        );
        assert_eq!(parse_moves("R ∆").unwrap_err().offset, 2);
    }

    #[test]
    fn test_reverse() {
        for mv in Move::iter() {
            assert_ne!(mv.reverse(), mv);
            assert_eq!(mv.reverse().reverse(), mv);
            assert_eq!(mv.reverse().face(), mv.face());
            assert_ne!(mv.reverse().is_prime(), mv.is_prime());
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for mv in Move::iter() {
            assert_eq!(parse_moves(&mv.to_string()), Ok(vec![mv]));
        }
        assert_eq!(Move::BackPrime.to_string(), "B'");
    }
}
