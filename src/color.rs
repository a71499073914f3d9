//! Sticker colors and cube faces.
//!
//! The cube is always held in one reference orientation: Up is white, Down is
//! yellow, Front is orange, Back is red, Right is green and Left is blue.

use strum::{Display, EnumIter, FromRepr};

use crate::facing::Facing;

/// One of the six sticker colors.
#[derive(Debug, Display, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Green,
    Red,
    Blue,
}

/// Display byte of each color, indexed by discriminant.
const COLOR_BYTES: [u8; 6] = [b'w', b'y', b'o', b'g', b'r', b'b'];

impl Color {
    /// Returns the single-character code used in the net layout.
    #[inline]
    pub const fn to_byte(self) -> u8 {
        COLOR_BYTES[self as usize]
    }

    /// Parses a net color code. Anything other than `w y o g r b` is `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        COLOR_BYTES
            .iter()
            .position(|&b| b == byte)
            .and_then(|i| Self::from_repr(i as u8))
    }

    /// Like [`Self::from_byte`] for a character of net text.
    pub fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok().and_then(Self::from_byte)
    }
}

/// One of the six faces of the cube.
#[derive(Debug, Display, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

impl Face {
    /// Axis the face belongs to.
    #[inline]
    pub const fn axis(self) -> Facing {
        match self {
            Face::Up | Face::Down => Facing::UpDown,
            Face::Front | Face::Back => Facing::FrontBack,
            Face::Right | Face::Left => Facing::RightLeft,
        }
    }

    /// Color of this face on a solved cube.
    #[inline]
    pub const fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Orange,
            Face::Back => Color::Red,
            Face::Right => Color::Green,
            Face::Left => Color::Blue,
        }
    }

    /// Upper-case notation letter.
    pub const fn symbol(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Face> {
        match symbol {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'R' => Some(Face::Right),
            'L' => Some(Face::Left),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_color_byte_roundtrip() {
        for color in Color::iter() {
            assert_eq!(Color::from_byte(color.to_byte()), Some(color));
        }
        assert_eq!(Color::White.to_byte(), b'w');
        assert_eq!(Color::Blue.to_byte(), b'b');
    }

    #[test]
    fn test_unknown_color_bytes() {
        for byte in [b'W', b'x', b' ', b'?', 0, 255] {
            assert_eq!(Color::from_byte(byte), None, "byte {byte} should not parse");
        }
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Color::from_char('g'), Some(Color::Green));
        assert_eq!(Color::from_char('é'), None);
        // U+0177 truncated to a byte would be 'w'
        assert_eq!(Color::from_char('\u{177}'), None);
    }

    #[test]
    fn test_face_axes() {
        assert_eq!(Face::Up.axis(), Facing::UpDown);
        assert_eq!(Face::Down.axis(), Facing::UpDown);
        assert_eq!(Face::Front.axis(), Facing::FrontBack);
        assert_eq!(Face::Back.axis(), Facing::FrontBack);
        assert_eq!(Face::Right.axis(), Facing::RightLeft);
        assert_eq!(Face::Left.axis(), Facing::RightLeft);
    }

    #[test]
    fn test_face_symbols() {
        for face in Face::iter() {
            assert_eq!(Face::from_symbol(face.symbol()), Some(face));
        }
        assert_eq!(Face::from_symbol('u'), None);
        assert_eq!(Face::from_symbol('M'), None);
    }

    #[test]
    fn test_home_colors_are_distinct() {
        let mut seen = Vec::new();
        for face in Face::iter() {
            assert!(!seen.contains(&face.home_color()));
            seen.push(face.home_color());
        }
    }
}
