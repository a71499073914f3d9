//! Wing cubelets: the single-color stickers inside each face of a 4x4x4 or
//! larger cube.

use std::fmt;

use strum::{EnumIter, FromRepr};

use crate::color::{Color, Face};
use crate::facing::{Turn, WingFacing};

#[derive(Debug, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WingType {
    White,
    Yellow,
    Orange,
    Green,
    Red,
    Blue,
}

impl WingType {
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            WingType::White => Color::White,
            WingType::Yellow => Color::Yellow,
            WingType::Orange => Color::Orange,
            WingType::Green => Color::Green,
            WingType::Red => Color::Red,
            WingType::Blue => Color::Blue,
        }
    }
}

impl From<Color> for WingType {
    fn from(color: Color) -> Self {
        match color {
            Color::White => WingType::White,
            Color::Yellow => WingType::Yellow,
            Color::Orange => WingType::Orange,
            Color::Green => WingType::Green,
            Color::Red => WingType::Red,
            Color::Blue => WingType::Blue,
        }
    }
}

impl fmt::Display for WingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wing{}", self.color())
    }
}

/// A wing sticker and the face it points at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WingCubelet {
    piece: WingType,
    rotation: WingFacing,
}

impl WingCubelet {
    pub const fn new(piece: WingType, rotation: WingFacing) -> Self {
        Self { piece, rotation }
    }

    #[inline]
    pub const fn piece(self) -> WingType {
        self.piece
    }

    #[inline]
    pub const fn rotation(self) -> WingFacing {
        self.rotation
    }

    /// Packs the piece into bits 0-2 and the facing into bits 3-5.
    pub const fn to_bits(self) -> u8 {
        (self.piece as u8 & 0b111) | (self.rotation as u8 & 0b111) << 3
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits >> 6 != 0 {
            return None;
        }
        let piece = WingType::from_repr(bits & 0b111)?;
        let rotation = WingFacing::from_repr((bits >> 3) & 0b111)?;
        Some(Self::new(piece, rotation))
    }

    #[inline]
    pub const fn turn(self, turn: Turn) -> Self {
        Self::new(self.piece, self.rotation.turn(turn))
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.piece.color()
    }
}

/// The wing showing `color` on `face`. Every color is a valid wing.
pub fn detect_wing(color: Color, face: Face) -> WingCubelet {
    WingCubelet::new(WingType::from(color), WingFacing::from(face))
}
