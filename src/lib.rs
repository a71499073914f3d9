//! NxNxN Rubik's Cube State Library
//!
//! Models a cube of any size as corner, edge and wing cubelets, applies outer
//! face turns, and reads and writes the unfolded textual net.

pub mod color;
pub mod corner;
pub mod cube;
pub mod edge;
pub mod facing;
pub mod layout;
pub mod moves;
pub mod parse;
pub mod persistence;
pub mod wing;

use std::fmt::Display;
use std::hash::Hash;

use strum::IntoEnumIterator;

pub use color::{Color, Face};
pub use cube::{FaceData, RubiksCube};
pub use moves::{parse_moves, InvalidMoveError, Move, MoveScanner};
pub use parse::{parse_cube, InvalidCubeState, LayoutError, ParseCubeError, StateProblem};

use corner::{CornerCubelet, CornerType};
use edge::{EdgeCubelet, EdgeType};
use wing::{WingCubelet, WingType};

/// Trait shared by the three cubelet kinds, so piece counting and the byte
/// codec can be written once.
pub trait Cubelet: Copy {
    /// Identity of the physical piece.
    type Piece: Copy + Eq + Hash + Display + IntoEnumIterator;

    fn piece(self) -> Self::Piece;
    fn to_bits(self) -> u8;
    fn from_bits(bits: u8) -> Option<Self>;
}

impl Cubelet for CornerCubelet {
    type Piece = CornerType;

    fn piece(self) -> CornerType {
        CornerCubelet::piece(self)
    }

    fn to_bits(self) -> u8 {
        CornerCubelet::to_bits(self)
    }

    fn from_bits(bits: u8) -> Option<Self> {
        CornerCubelet::from_bits(bits)
    }
}

impl Cubelet for EdgeCubelet {
    type Piece = EdgeType;

    fn piece(self) -> EdgeType {
        EdgeCubelet::piece(self)
    }

    fn to_bits(self) -> u8 {
        EdgeCubelet::to_bits(self)
    }

    fn from_bits(bits: u8) -> Option<Self> {
        EdgeCubelet::from_bits(bits)
    }
}

impl Cubelet for WingCubelet {
    type Piece = WingType;

    fn piece(self) -> WingType {
        WingCubelet::piece(self)
    }

    fn to_bits(self) -> u8 {
        WingCubelet::to_bits(self)
    }

    fn from_bits(bits: u8) -> Option<Self> {
        WingCubelet::from_bits(bits)
    }
}
