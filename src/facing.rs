//! Orientation algebra for cubelets.
//!
//! Every table here is indexed by enum discriminants and encodes a piece of
//! the cube's rotation group. Turning about an axis fixes that axis and swaps
//! the other two, so the same table serves both a turn and its prime.

use strum::{Display, EnumIter, FromRepr};

use crate::color::Face;

/// One of the three perpendicular axes a sticker can face along.
#[derive(Debug, Display, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Facing {
    UpDown,
    FrontBack,
    RightLeft,
}

/// Axis reached by a sticker on `[facing]` after a turn about `[axis]`.
const ROTATION_TABLE: [[Facing; 3]; 3] = [
    // UpDown
    [Facing::UpDown, Facing::RightLeft, Facing::FrontBack],
    // FrontBack
    [Facing::RightLeft, Facing::FrontBack, Facing::UpDown],
    // RightLeft
    [Facing::FrontBack, Facing::UpDown, Facing::RightLeft],
];

impl Facing {
    /// Returns the axis this facing ends up on after `turn`.
    #[inline]
    pub const fn turn(self, turn: Turn) -> Facing {
        ROTATION_TABLE[self as usize][turn.shortened() as usize]
    }
}

/// A clockwise quarter turn of one face, as seen from outside that face.
#[derive(Debug, Display, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Turn {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

impl Turn {
    /// Axis of rotation. Pieces only care about the axis, not the sign.
    #[inline]
    pub const fn shortened(self) -> Facing {
        match self {
            Turn::Up | Turn::Down => Facing::UpDown,
            Turn::Front | Turn::Back => Facing::FrontBack,
            Turn::Right | Turn::Left => Facing::RightLeft,
        }
    }

    /// The turn of the face on the other side of the same axis.
    pub const fn opposite(self) -> Turn {
        match self {
            Turn::Up => Turn::Down,
            Turn::Down => Turn::Up,
            Turn::Front => Turn::Back,
            Turn::Back => Turn::Front,
            Turn::Right => Turn::Left,
            Turn::Left => Turn::Right,
        }
    }
}

impl From<Face> for Turn {
    fn from(face: Face) -> Self {
        match face {
            Face::Up => Turn::Up,
            Face::Down => Turn::Down,
            Face::Front => Turn::Front,
            Face::Back => Turn::Back,
            Face::Right => Turn::Right,
            Face::Left => Turn::Left,
        }
    }
}

/// Handedness of the frame formed by a corner's outward normals taken in
/// axis order (UpDown, FrontBack, RightLeft).
///
/// Neighbouring corner slots always differ, so a quarter turn flips the
/// handedness of every corner it moves.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Handedness {
    Right,
    Left,
}

impl Handedness {
    pub const fn flipped(self) -> Handedness {
        match self {
            Handedness::Right => Handedness::Left,
            Handedness::Left => Handedness::Right,
        }
    }
}

/// Which of its two colors an edge shows on the primary axis of its slot.
///
/// `Normal` puts the first listed color on Up/Down when the slot touches
/// Up/Down, otherwise on Front/Back. Edges without a white or yellow sticker
/// sit in the `Normal` state on a solved cube.
#[derive(Debug, Display, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EdgeFacing {
    Normal,
    Opposite,
}

impl EdgeFacing {
    /// Axis holding the edge's first color while it sits at `position`.
    #[inline]
    pub const fn at(self, position: EdgePosition) -> Facing {
        EDGE_AT_FACING_TABLE[position as usize][self as usize]
    }

    /// Facing after a turn, where `position` is the slot the edge occupied
    /// before the turn.
    pub fn turn(self, position: EdgePosition, turn: Turn) -> EdgeFacing {
        let moved = position.turn(turn);
        if self.at(position).turn(turn) == moved.primary() {
            EdgeFacing::Normal
        } else {
            EdgeFacing::Opposite
        }
    }

    pub const fn flipped(self) -> EdgeFacing {
        match self {
            EdgeFacing::Normal => EdgeFacing::Opposite,
            EdgeFacing::Opposite => EdgeFacing::Normal,
        }
    }
}

/// The pair of axes spanned by an edge slot.
#[derive(Debug, Display, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EdgePosition {
    TopFront,
    TopRight,
    FrontRight,
}

const EDGE_AT_FACING_TABLE: [[Facing; 2]; 3] = [
    // TopFront
    [Facing::UpDown, Facing::FrontBack],
    // TopRight
    [Facing::UpDown, Facing::RightLeft],
    // FrontRight
    [Facing::FrontBack, Facing::RightLeft],
];

const EDGE_ROTATION_TABLE: [[EdgePosition; 3]; 3] = [
    // TopFront
    [
        EdgePosition::TopRight,
        EdgePosition::FrontRight,
        EdgePosition::TopFront,
    ],
    // TopRight
    [
        EdgePosition::TopFront,
        EdgePosition::TopRight,
        EdgePosition::FrontRight,
    ],
    // FrontRight
    [
        EdgePosition::FrontRight,
        EdgePosition::TopFront,
        EdgePosition::TopRight,
    ],
];

const EDGE_STATE_OF_TABLE: [[Option<EdgeFacing>; 3]; 3] = [
    // TopFront
    [Some(EdgeFacing::Normal), Some(EdgeFacing::Opposite), None],
    // TopRight
    [Some(EdgeFacing::Normal), None, Some(EdgeFacing::Opposite)],
    // FrontRight
    [None, Some(EdgeFacing::Normal), Some(EdgeFacing::Opposite)],
];

impl EdgePosition {
    /// Slot shape after the slot is carried around by `turn`.
    #[inline]
    pub const fn turn(self, turn: Turn) -> EdgePosition {
        EDGE_ROTATION_TABLE[self as usize][turn.shortened() as usize]
    }

    /// Which sticker of an edge in this slot lies on `facing`, or `None` if
    /// the slot does not span that axis.
    #[inline]
    pub const fn state_of(self, facing: Facing) -> Option<EdgeFacing> {
        EDGE_STATE_OF_TABLE[self as usize][facing as usize]
    }

    /// The axis a `Normal` edge shows its first color on.
    #[inline]
    pub const fn primary(self) -> Facing {
        EDGE_AT_FACING_TABLE[self as usize][0]
    }
}

/// The face a wing sticker currently points at.
#[derive(Debug, Display, EnumIter, FromRepr, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WingFacing {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

/// Indexed by `[facing][turn]`.
const WING_ROTATION_TABLE: [[WingFacing; 6]; 6] = {
    use WingFacing::*;
    [
        // Up:    U     D     F      B     R     L
        [Up, Up, Right, Left, Back, Front],
        // Down
        [Down, Down, Left, Right, Front, Back],
        // Front
        [Left, Right, Front, Front, Up, Down],
        // Back
        [Right, Left, Back, Back, Down, Up],
        // Right
        [Front, Back, Down, Up, Right, Right],
        // Left
        [Back, Front, Up, Down, Left, Left],
    ]
};

impl WingFacing {
    #[inline]
    pub const fn turn(self, turn: Turn) -> WingFacing {
        WING_ROTATION_TABLE[self as usize][turn as usize]
    }
}

impl From<Face> for WingFacing {
    fn from(face: Face) -> Self {
        match face {
            Face::Up => WingFacing::Up,
            Face::Down => WingFacing::Down,
            Face::Front => WingFacing::Front,
            Face::Back => WingFacing::Back,
            Face::Right => WingFacing::Right,
            Face::Left => WingFacing::Left,
        }
    }
}
