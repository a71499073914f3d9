//! NxNxN cube state and the face-turn engine.

use std::fmt;

use crate::color::{Color, Face};
use crate::corner::CornerCubelet;
use crate::edge::EdgeCubelet;
use crate::facing::{Turn, WingFacing};
use crate::layout::{
    corner_cells, edge_slot, Side, CORNER_SLOT_HANDEDNESS, FACE_CORNER_INDEXES,
    FACE_EDGE_POSITION, SOLVED_CORNERS, SOLVED_EDGE_LINES,
};
use crate::moves::Move;
use crate::wing::{WingCubelet, WingType};

/// Colors of one face, row-major as seen in the net.
pub type FaceData = Vec<Color>;

/// The state of an NxNxN Rubik's cube, stored as the type and rotation of
/// every corner, edge and wing cubelet.
///
/// The cube is held with white up, yellow down, orange front, red back, green
/// right and blue left. Slot order is described in [`crate::layout`]; the
/// solved state of every corner and edge has the 0 rotation value, and every
/// wing faces the face it belongs to.
///
/// Edges are stored as 12 lines of `edge_index` pieces and wings as 6 face
/// grids of `wing_index` stickers. A 3x3x3 has no wings: its centers never
/// move, so they are implied by the face.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RubiksCube {
    n: usize,
    edge_index: usize,
    wing_index: usize,
    corners: [CornerCubelet; 8],
    edges: Vec<EdgeCubelet>,
    wings: Vec<WingCubelet>,
}

impl RubiksCube {
    /// Forms a solved cube of size `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`.
    pub fn new_solved(n: usize) -> Self {
        assert!(n >= 2, "minimum cube size is 2, got {n}");

        let edge_index = n - 2;
        let wing_index = wing_count(n);

        let corners = SOLVED_CORNERS.map(CornerCubelet::solved);

        let edges = SOLVED_EDGE_LINES
            .iter()
            .flat_map(|&piece| std::iter::repeat(EdgeCubelet::solved(piece)).take(edge_index))
            .collect();

        let wings = [
            Face::Up,
            Face::Down,
            Face::Front,
            Face::Back,
            Face::Right,
            Face::Left,
        ]
        .into_iter()
        .flat_map(|face| {
            let wing = WingCubelet::new(
                WingType::from(face.home_color()),
                WingFacing::from(face),
            );
            std::iter::repeat(wing).take(wing_index)
        })
        .collect();

        Self {
            n,
            edge_index,
            wing_index,
            corners,
            edges,
            wings,
        }
    }

    /// Builds a cube from raw cubelets. Lengths must match `n`.
    pub(crate) fn from_parts(
        n: usize,
        corners: [CornerCubelet; 8],
        edges: Vec<EdgeCubelet>,
        wings: Vec<WingCubelet>,
    ) -> Self {
        let edge_index = n - 2;
        let wing_index = wing_count(n);
        debug_assert_eq!(edges.len(), 12 * edge_index);
        debug_assert_eq!(wings.len(), 6 * wing_index);
        Self {
            n,
            edge_index,
            wing_index,
            corners,
            edges,
            wings,
        }
    }

    /// Cube size `N`.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Edges per edge line (`N - 2`).
    #[inline]
    pub fn edge_index(&self) -> usize {
        self.edge_index
    }

    /// Wings per face: `(N - 2)^2`, or 0 for a 3x3x3.
    #[inline]
    pub fn wing_index(&self) -> usize {
        self.wing_index
    }

    pub fn corners(&self) -> &[CornerCubelet; 8] {
        &self.corners
    }

    pub fn edges(&self) -> &[EdgeCubelet] {
        &self.edges
    }

    pub fn wings(&self) -> &[WingCubelet] {
        &self.wings
    }

    /// Side length of each face's wing grid.
    fn wing_side(&self) -> usize {
        if self.wing_index == 0 {
            0
        } else {
            self.n - 2
        }
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::new_solved(self.n)
    }

    /// Returns the cube after `mv`.
    pub fn apply_move(&self, mv: Move) -> Self {
        log::trace!("applying {mv} to {n}x{n}x{n}", n = self.n);
        match mv.face() {
            Face::Up => self.rotate_up(mv.is_prime()),
            Face::Down => self.rotate_down(mv.is_prime()),
            Face::Front => self.rotate_front(mv.is_prime()),
            Face::Back => self.rotate_back(mv.is_prime()),
            Face::Right => self.rotate_right(mv.is_prime()),
            Face::Left => self.rotate_left(mv.is_prime()),
        }
    }

    /// Returns the cube after every move in order.
    pub fn apply_moves<'a>(&self, moves: impl IntoIterator<Item = &'a Move>) -> Self {
        moves
            .into_iter()
            .fold(self.clone(), |cube, &mv| cube.apply_move(mv))
    }

    /// Number of times `moves` must be applied to get back to this state.
    pub fn order(&self, moves: &[Move]) -> usize {
        let mut count = 1;
        let mut current = self.apply_moves(moves);
        while current != *self {
            current = current.apply_moves(moves);
            count += 1;
        }
        count
    }

    pub fn rotate_up(&self, prime: bool) -> Self {
        self.rotate(Face::Up, prime)
    }

    pub fn rotate_down(&self, prime: bool) -> Self {
        self.rotate(Face::Down, prime)
    }

    pub fn rotate_front(&self, prime: bool) -> Self {
        self.rotate(Face::Front, prime)
    }

    pub fn rotate_back(&self, prime: bool) -> Self {
        self.rotate(Face::Back, prime)
    }

    pub fn rotate_right(&self, prime: bool) -> Self {
        self.rotate(Face::Right, prime)
    }

    pub fn rotate_left(&self, prime: bool) -> Self {
        self.rotate(Face::Left, prime)
    }

    /// Turns the outer layer of `face` a quarter turn, clockwise unless
    /// `prime`.
    ///
    /// Pieces are cycled first and reoriented after, so each turn sees the
    /// piece already in its new slot.
    fn rotate(&self, face: Face, prime: bool) -> Self {
        let mut next = self.clone();
        let turn = Turn::from(face);
        let f = face as usize;

        // corners
        let [tl, tr, bl, br] = FACE_CORNER_INDEXES[f];
        cycle_items(prime, &mut next.corners, [tl, tr, br, bl]);
        for slot in [tl, tr, bl, br] {
            next.corners[slot] = next.corners[slot].turn(turn);
        }

        // edges
        let positions = FACE_EDGE_POSITION[face.axis() as usize];
        let ei = self.edge_index;
        for j in 0..ei {
            let slots = [
                edge_slot(f, Side::Top, j, ei),
                edge_slot(f, Side::Right, j, ei),
                edge_slot(f, Side::Bottom, ei - 1 - j, ei),
                edge_slot(f, Side::Left, ei - 1 - j, ei),
            ];
            cycle_items(prime, &mut next.edges, slots);
            // opposite sides share a slot shape, so the source position is
            // the same whichever way the layer turned
            for (side, slot) in [Side::Top, Side::Right, Side::Bottom, Side::Left]
                .into_iter()
                .zip(slots)
            {
                let source = positions[side.previous() as usize];
                next.edges[slot] = next.edges[slot].turn(turn, source);
            }
        }

        // wings
        let m = self.wing_side();
        let base = f * self.wing_index;
        let old = &self.wings[base..base + self.wing_index];
        for r in 0..m {
            for c in 0..m {
                let (dest_r, dest_c) = if prime { (m - 1 - c, r) } else { (c, m - 1 - r) };
                next.wings[base + dest_r * m + dest_c] = old[r * m + c].turn(turn);
            }
        }

        next
    }

    /// Returns the colors of one face, row-major as laid out in the net.
    ///
    /// Corners fill the grid corners, edge lines the sides and wings the
    /// interior. The center of a 3x3x3 is always the face's home color.
    pub fn face(&self, face: Face) -> FaceData {
        let n = self.n;
        let f = face as usize;
        let facing = face.axis();
        let mut grid = vec![face.home_color(); n * n];

        for (cell, slot) in corner_cells(n).into_iter().zip(FACE_CORNER_INDEXES[f]) {
            grid[cell] = self.corners[slot].color(facing, CORNER_SLOT_HANDEDNESS[slot]);
        }

        let positions = FACE_EDGE_POSITION[facing as usize];
        for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
            let position = positions[side as usize];
            for j in 0..self.edge_index {
                let edge = self.edges[edge_slot(f, side, j, self.edge_index)];
                if let Some(color) = edge.color(position, facing) {
                    grid[side.cell(n, j)] = color;
                }
            }
        }

        let m = self.wing_side();
        let wings = &self.wings[f * self.wing_index..(f + 1) * self.wing_index];
        for r in 0..m {
            for c in 0..m {
                grid[(r + 1) * n + c + 1] = wings[r * m + c].color();
            }
        }

        grid
    }
}

/// Number of wings per face for a cube of size `n`.
fn wing_count(n: usize) -> usize {
    // a 3x3x3 center never moves
    if n == 3 {
        0
    } else {
        (n - 2) * (n - 2)
    }
}

/// Moves `items[a] -> items[b] -> items[c] -> items[d] -> items[a]`, or the
/// other way round when `reverse`.
fn cycle_items<T: Copy>(reverse: bool, items: &mut [T], [a, b, c, d]: [usize; 4]) {
    if reverse {
        let first = items[a];
        items[a] = items[b];
        items[b] = items[c];
        items[c] = items[d];
        items[d] = first;
    } else {
        let last = items[d];
        items[d] = items[c];
        items[c] = items[b];
        items[b] = items[a];
        items[a] = last;
    }
}

impl fmt::Display for RubiksCube {
    /// Writes the unfolded net: Up, then Left/Front/Right/Back side by side,
    /// then Down.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n;
        let faces = [
            Face::Up,
            Face::Down,
            Face::Front,
            Face::Back,
            Face::Right,
            Face::Left,
        ]
        .map(|face| self.face(face));

        let row = |face: Face, r: usize| -> String {
            faces[face as usize][r * n..(r + 1) * n]
                .iter()
                .map(|&color| char::from(color.to_byte()))
                .collect()
        };
        let pad = " ".repeat(n);
        let tail = " ".repeat(2 * n);

        for r in 0..n {
            writeln!(f, "{pad}{}{tail}", row(Face::Up, r))?;
        }
        for r in 0..n {
            writeln!(
                f,
                "{}{}{}{}",
                row(Face::Left, r),
                row(Face::Front, r),
                row(Face::Right, r),
                row(Face::Back, r)
            )?;
        }
        for r in 0..n {
            writeln!(f, "{pad}{}{tail}", row(Face::Down, r))?;
        }
        Ok(())
    }
}
