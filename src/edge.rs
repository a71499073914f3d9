//! Edge cubelets.

use std::fmt;

use strum::{EnumIter, FromRepr, IntoEnumIterator};

use crate::color::Color;
use crate::facing::{EdgeFacing, EdgePosition, Facing, Turn};

/// One of the twelve physical edge pieces.
#[derive(Debug, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EdgeType {
    WhiteOrange,
    WhiteGreen,
    WhiteRed,
    WhiteBlue,

    YellowOrange,
    YellowGreen,
    YellowRed,
    YellowBlue,

    OrangeGreen,
    RedGreen,
    RedBlue,
    OrangeBlue,
}

const EDGE_COLOR_TABLE: [[Color; 2]; 12] = {
    use Color::*;
    [
        [White, Orange],
        [White, Green],
        [White, Red],
        [White, Blue],
        [Yellow, Orange],
        [Yellow, Green],
        [Yellow, Red],
        [Yellow, Blue],
        [Orange, Green],
        [Red, Green],
        [Red, Blue],
        [Orange, Blue],
    ]
};

impl EdgeType {
    /// First color for `Normal`, second for `Opposite`.
    #[inline]
    pub const fn color(self, side: EdgeFacing) -> Color {
        EDGE_COLOR_TABLE[self as usize][side as usize]
    }

    pub const fn colors(self) -> [Color; 2] {
        EDGE_COLOR_TABLE[self as usize]
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.colors();
        write!(f, "Edge{a}{b}")
    }
}

/// An edge piece together with its facing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeCubelet {
    piece: EdgeType,
    rotation: EdgeFacing,
}

impl EdgeCubelet {
    pub const fn new(piece: EdgeType, rotation: EdgeFacing) -> Self {
        Self { piece, rotation }
    }

    pub const fn solved(piece: EdgeType) -> Self {
        Self::new(piece, EdgeFacing::Normal)
    }

    #[inline]
    pub const fn piece(self) -> EdgeType {
        self.piece
    }

    #[inline]
    pub const fn rotation(self) -> EdgeFacing {
        self.rotation
    }

    /// Packs the piece into bits 0-3 and the facing into bit 4.
    pub const fn to_bits(self) -> u8 {
        (self.piece as u8 & 0b1111) | (self.rotation as u8 & 0b1) << 4
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits >> 5 != 0 {
            return None;
        }
        let piece = EdgeType::from_repr(bits & 0b1111)?;
        let rotation = EdgeFacing::from_repr((bits >> 4) & 0b1)?;
        Some(Self::new(piece, rotation))
    }

    /// The same piece after `turn`, where `position` is the shape of the
    /// slot it was in before the turn.
    #[inline]
    pub fn turn(self, turn: Turn, position: EdgePosition) -> Self {
        Self::new(self.piece, self.rotation.turn(position, turn))
    }

    /// Color on one side of the slot: `Normal` is the slot's primary axis.
    #[inline]
    pub const fn sticker(self, side: EdgeFacing) -> Color {
        match self.rotation {
            EdgeFacing::Normal => self.piece.color(side),
            EdgeFacing::Opposite => self.piece.color(side.flipped()),
        }
    }

    /// Color on `facing` while sitting at `position`, or `None` if the slot
    /// does not touch that axis.
    pub fn color(self, position: EdgePosition, facing: Facing) -> Option<Color> {
        position.state_of(facing).map(|side| self.sticker(side))
    }
}

/// Finds the edge showing `primary` on its slot's primary axis and
/// `secondary` on the other one.
pub fn detect_edge(primary: Color, secondary: Color) -> Option<EdgeCubelet> {
    EdgeType::iter().find_map(|piece| {
        let [a, b] = piece.colors();
        if [a, b] == [primary, secondary] {
            Some(EdgeCubelet::new(piece, EdgeFacing::Normal))
        } else if [b, a] == [primary, secondary] {
            Some(EdgeCubelet::new(piece, EdgeFacing::Opposite))
        } else {
            None
        }
    })
}
