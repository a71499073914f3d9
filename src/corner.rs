//! Corner cubelets.
//!
//! A corner is stored as its identity plus the axis its primary (white or
//! yellow) sticker currently lies on. The remaining two stickers follow from
//! the handedness of the slot the corner sits in.

use std::fmt;

use strum::{EnumIter, FromRepr, IntoEnumIterator};

use crate::color::Color;
use crate::facing::{Facing, Handedness, Turn};

/// One of the eight physical corner pieces.
#[derive(Debug, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CornerType {
    WhiteOrangeGreen,
    WhiteRedGreen,
    WhiteRedBlue,
    WhiteOrangeBlue,
    YellowOrangeGreen,
    YellowRedGreen,
    YellowRedBlue,
    YellowOrangeBlue,
}

/// Colors of each corner in (UpDown, FrontBack, RightLeft) order.
const CORNER_COLOR_TABLE: [[Color; 3]; 8] = {
    use Color::*;
    [
        [White, Orange, Green],
        [White, Red, Green],
        [White, Red, Blue],
        [White, Orange, Blue],
        [Yellow, Orange, Green],
        [Yellow, Red, Green],
        [Yellow, Red, Blue],
        [Yellow, Orange, Blue],
    ]
};

/// Handedness of each corner's home slot.
const CORNER_HANDEDNESS_TABLE: [Handedness; 8] = {
    use Handedness::*;
    [Right, Left, Right, Left, Left, Right, Left, Right]
};

/// For `[rotation][mirrored][axis]`, the home axis whose color shows on `axis`.
///
/// Unmirrored rows are even permutations of the home axes, mirrored rows are
/// odd ones; either way `rotation` is the axis showing the home Up/Down color.
const HOME_AXIS_TABLE: [[[Facing; 3]; 2]; 3] = {
    use Facing::*;
    [
        // UpDown
        [[UpDown, FrontBack, RightLeft], [UpDown, RightLeft, FrontBack]],
        // FrontBack
        [[RightLeft, UpDown, FrontBack], [FrontBack, UpDown, RightLeft]],
        // RightLeft
        [[FrontBack, RightLeft, UpDown], [RightLeft, FrontBack, UpDown]],
    ]
};

impl CornerType {
    /// Sticker color on `facing` when the corner sits solved in its home slot.
    #[inline]
    pub const fn color(self, facing: Facing) -> Color {
        CORNER_COLOR_TABLE[self as usize][facing as usize]
    }

    /// Handedness of the slot this corner occupies on a solved cube.
    #[inline]
    pub const fn handedness(self) -> Handedness {
        CORNER_HANDEDNESS_TABLE[self as usize]
    }

    pub const fn colors(self) -> [Color; 3] {
        CORNER_COLOR_TABLE[self as usize]
    }
}

impl fmt::Display for CornerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.colors();
        write!(f, "Corner{a}{b}{c}")
    }
}

/// A corner piece together with its rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CornerCubelet {
    piece: CornerType,
    rotation: Facing,
}

impl CornerCubelet {
    pub const fn new(piece: CornerType, rotation: Facing) -> Self {
        Self { piece, rotation }
    }

    /// The corner in its solved rotation.
    pub const fn solved(piece: CornerType) -> Self {
        Self::new(piece, Facing::UpDown)
    }

    #[inline]
    pub const fn piece(self) -> CornerType {
        self.piece
    }

    #[inline]
    pub const fn rotation(self) -> Facing {
        self.rotation
    }

    /// Packs the piece into bits 0-2 and the rotation into bits 3-4.
    pub const fn to_bits(self) -> u8 {
        (self.piece as u8 & 0b111) | (self.rotation as u8 & 0b11) << 3
    }

    /// Unpacks a byte written by [`Self::to_bits`], rejecting out of range
    /// rotations and stray high bits.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits >> 5 != 0 {
            return None;
        }
        let piece = CornerType::from_repr(bits & 0b111)?;
        let rotation = Facing::from_repr((bits >> 3) & 0b11)?;
        Some(Self::new(piece, rotation))
    }

    /// The same piece after `turn`. Only the rotation changes.
    #[inline]
    pub const fn turn(self, turn: Turn) -> Self {
        Self::new(self.piece, self.rotation.turn(turn))
    }

    /// Sticker color on `facing` while sitting in a slot of the given
    /// handedness.
    pub const fn color(self, facing: Facing, slot: Handedness) -> Color {
        let mirrored = !matches!(
            (self.piece.handedness(), slot),
            (Handedness::Right, Handedness::Right) | (Handedness::Left, Handedness::Left)
        );
        let home = HOME_AXIS_TABLE[self.rotation as usize][mirrored as usize][facing as usize];
        self.piece.color(home)
    }
}

/// Finds the corner showing `up_down`, `front_back` and `right_left` on a
/// slot of the given handedness.
///
/// Rotations are tried in order, so the result is the unique cubelet whose
/// [`CornerCubelet::color`] reproduces the three stickers. Returns `None` for
/// color triples no physical corner can show there, including mirror images
/// of real corners.
pub fn detect_corner(
    up_down: Color,
    front_back: Color,
    right_left: Color,
    slot: Handedness,
) -> Option<CornerCubelet> {
    let stickers = [up_down, front_back, right_left];
    Facing::iter().find_map(|rotation| {
        CornerType::iter()
            .map(|piece| CornerCubelet::new(piece, rotation))
            .find(|corner| {
                Facing::iter()
                    .zip(stickers)
                    .all(|(facing, color)| corner.color(facing, slot) == color)
            })
    })
}
