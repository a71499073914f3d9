//! Slot layout of an NxNxN cube.
//!
//! Faces are read row-major as they appear in the unfolded net:
//!
//! ```text
//! . . . u u u . . . . . .
//! . . . u u u . . . . . .
//! . . . u u u . . . . . .
//! l l l f f f r r r b b b
//! l l l f f f r r r b b b
//! l l l f f f r r r b b b
//! . . . d d d . . . . . .
//! . . . d d d . . . . . .
//! . . . d d d . . . . . .
//! ```
//!
//! Every face is seen from outside, so a clockwise face turn is a clockwise
//! rotation of its grid. The tables below map grid positions to corner slots
//! and edge lines; turning and rendering both go through them.

use strum::EnumIter;

use crate::corner::CornerType;
use crate::edge::EdgeType;
use crate::facing::{EdgePosition, Handedness};

/// Corner slots. Slots 0-3 run clockwise around the right face from
/// up-front-right, slots 4-7 counter-clockwise around the left face from
/// up-front-left.
pub const SOLVED_CORNERS: [CornerType; 8] = [
    CornerType::WhiteOrangeGreen,
    CornerType::WhiteRedGreen,
    CornerType::YellowRedGreen,
    CornerType::YellowOrangeGreen,
    CornerType::WhiteOrangeBlue,
    CornerType::WhiteRedBlue,
    CornerType::YellowRedBlue,
    CornerType::YellowOrangeBlue,
];

/// Handedness of each corner slot.
pub const CORNER_SLOT_HANDEDNESS: [Handedness; 8] = {
    use Handedness::*;
    [Right, Left, Right, Left, Left, Right, Left, Right]
};

/// Edge lines, `N - 2` edges each.
/// - right band (0-3): up, back, down, front of the right face
/// - left band (4-7): up, back, down, front of the left face
/// - middle band (8-11): up-front, up-back, down-back, down-front
pub const SOLVED_EDGE_LINES: [EdgeType; 12] = [
    EdgeType::WhiteGreen,
    EdgeType::RedGreen,
    EdgeType::YellowGreen,
    EdgeType::OrangeGreen,
    EdgeType::WhiteBlue,
    EdgeType::RedBlue,
    EdgeType::YellowBlue,
    EdgeType::OrangeBlue,
    EdgeType::WhiteOrange,
    EdgeType::WhiteRed,
    EdgeType::YellowRed,
    EdgeType::YellowOrange,
];

/// Corner slots of each face: top-left, top-right, bottom-left, bottom-right.
pub const FACE_CORNER_INDEXES: [[usize; 4]; 6] = [
    [5, 1, 4, 0],
    [7, 3, 6, 2],
    [4, 0, 7, 3],
    [1, 5, 2, 6],
    [0, 1, 3, 2],
    [5, 4, 6, 7],
];

/// Edge lines along each face side, in [`Side`] order.
pub const FACE_EDGE_INDEXES: [[usize; 4]; 6] = [
    [0x09, 0x00, 0x08, 0x04],
    [0x0b, 0x02, 0x0a, 0x06],
    [0x08, 0x03, 0x0b, 0x07],
    [0x09, 0x05, 0x0a, 0x01],
    [0x00, 0x01, 0x02, 0x03],
    [0x04, 0x07, 0x06, 0x05],
];

/// Whether reading a side of the face (rows left to right, columns top to
/// bottom) walks its edge line against the line's storage order.
///
/// Lines are stored from the left, down or back end of their axis.
pub const FACE_EDGE_REVERSED: [[bool; 4]; 6] = [
    [false, false, false, false],
    [false, true, false, true],
    [false, true, false, true],
    [true, true, true, true],
    [true, true, true, true],
    [false, true, false, true],
];

/// Slot shape of each face side, indexed by the face's axis.
pub const FACE_EDGE_POSITION: [[EdgePosition; 4]; 3] = {
    use EdgePosition::*;
    [
        [TopFront, TopRight, TopFront, TopRight],
        [TopFront, FrontRight, TopFront, FrontRight],
        [TopRight, FrontRight, TopRight, FrontRight],
    ]
};

/// A side of a face grid. Clockwise turns carry each side to the next one.
#[derive(Debug, EnumIter, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Side that the clockwise turn carries into this one.
    pub const fn previous(self) -> Side {
        match self {
            Side::Top => Side::Left,
            Side::Right => Side::Top,
            Side::Bottom => Side::Right,
            Side::Left => Side::Bottom,
        }
    }

    /// Grid cell of the `j`-th edge along this side of an `n`x`n` face.
    pub const fn cell(self, n: usize, j: usize) -> usize {
        match self {
            Side::Top => 1 + j,
            Side::Right => (1 + j) * n + n - 1,
            Side::Bottom => (n - 1) * n + 1 + j,
            Side::Left => (1 + j) * n,
        }
    }
}

/// Grid cells of the four corners, in [`FACE_CORNER_INDEXES`] order.
pub const fn corner_cells(n: usize) -> [usize; 4] {
    [0, n - 1, n * (n - 1), n * n - 1]
}

/// Index into the edge array of the `j`-th edge read along `side` of `face`.
pub fn edge_slot(face: usize, side: Side, j: usize, edge_index: usize) -> usize {
    let line = FACE_EDGE_INDEXES[face][side as usize];
    let k = if FACE_EDGE_REVERSED[face][side as usize] {
        edge_index - 1 - j
    } else {
        j
    };
    line * edge_index + k
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::color::Face;

    #[test]
    fn test_every_corner_slot_on_three_faces() {
        let mut seen = [0; 8];
        for face in FACE_CORNER_INDEXES {
            for slot in face {
                seen[slot] += 1;
            }
        }
        assert_eq!(seen, [3; 8]);
    }

    #[test]
    fn test_every_edge_line_on_two_faces() {
        let mut seen = [0; 12];
        for face in FACE_EDGE_INDEXES {
            for line in face {
                seen[line] += 1;
            }
        }
        assert_eq!(seen, [2; 12]);
    }

    #[test]
    fn test_shared_lines_span_both_face_axes() {
        for face in Face::iter() {
            for side in Side::iter() {
                let position = FACE_EDGE_POSITION[face.axis() as usize][side as usize];
                assert!(position.state_of(face.axis()).is_some());
            }
        }
    }

    #[test]
    fn test_corner_slots_alternate_handedness_around_each_face() {
        for face in FACE_CORNER_INDEXES {
            let [tl, tr, bl, br] = face.map(|slot| CORNER_SLOT_HANDEDNESS[slot]);
            assert_eq!(tr, tl.flipped());
            assert_eq!(br, tr.flipped());
            assert_eq!(bl, br.flipped());
            assert_eq!(tl, bl.flipped());
        }
    }

    #[test]
    fn test_solved_corners_sit_in_matching_handedness() {
        for (slot, piece) in SOLVED_CORNERS.iter().enumerate() {
            assert_eq!(piece.handedness(), CORNER_SLOT_HANDEDNESS[slot]);
        }
    }

    #[test]
    fn test_side_cells_3x3() {
        assert_eq!(Side::Top.cell(3, 0), 1);
        assert_eq!(Side::Right.cell(3, 0), 5);
        assert_eq!(Side::Bottom.cell(3, 0), 7);
        assert_eq!(Side::Left.cell(3, 0), 3);
        assert_eq!(corner_cells(3), [0, 2, 6, 8]);
    }

    #[test]
    fn test_edge_slot_direction() {
        // the up-right line is read forward on Up and backward on Right
        assert_eq!(edge_slot(Face::Up as usize, Side::Right, 0, 3), 0);
        assert_eq!(edge_slot(Face::Right as usize, Side::Top, 0, 3), 2);
    }
}
