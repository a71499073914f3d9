//! Reading a cube back from its unfolded net.
//!
//! Parsing runs in two stages. The net is first split into six per-face color
//! grids, which only checks the shape of the text. Every slot is then handed to
//! the cubelet detectors, and all problems found are reported together.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use crate::color::{Color, Face};
use crate::corner::{detect_corner, CornerCubelet};
use crate::cube::{FaceData, RubiksCube};
use crate::edge::{detect_edge, EdgeCubelet};
use crate::facing::EdgeFacing;
use crate::layout::{
    corner_cells, edge_slot, Side, CORNER_SLOT_HANDEDNESS, FACE_CORNER_INDEXES,
    FACE_EDGE_POSITION, SOLVED_CORNERS,
};
use crate::wing::{detect_wing, WingCubelet};
use crate::Cubelet;

/// Color grids of all six faces, indexed by [`Face`].
pub type CubeFaceData = [FaceData; 6];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("a net needs 3N lines with N of at least 2, found {found}")]
    LineCount { found: usize },
    #[error("line {line} does not have the shape of a net row")]
    BadLine { line: usize },
    #[error("unknown color {found:?} at line {line}, column {column}")]
    UnknownColor {
        line: usize,
        column: usize,
        found: char,
    },
}

/// A single inconsistency between the stickers and a real cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateProblem {
    /// No corner shows these (UpDown, FrontBack, RightLeft) colors in the slot.
    Corner { slot: usize, colors: [Color; 3] },
    /// No edge shows these (primary, secondary) colors.
    Edge { slot: usize, colors: [Color; 2] },
    /// The center of a 3x3x3 face is not the face's color.
    Center { face: Face, found: Color },
    PieceCount {
        piece: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for StateProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateProblem::Corner { slot, colors } => {
                let [a, b, c] = colors;
                write!(f, "corner slot {slot} shows no real corner: {a} {b} {c}")
            }
            StateProblem::Edge { slot, colors } => {
                let [a, b] = colors;
                write!(f, "edge slot {slot} shows no real edge: {a} {b}")
            }
            StateProblem::Center { face, found } => {
                write!(f, "{face} center is {found}, expected {}", face.home_color())
            }
            StateProblem::PieceCount {
                piece,
                expected,
                found,
            } => write!(f, "{piece} appears {found} times, expected {expected}"),
        }
    }
}

/// Every problem found while detecting a cube.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid cube state: {}", format_problems(.problems))]
pub struct InvalidCubeState {
    pub problems: Vec<StateProblem>,
}

fn format_problems(problems: &[StateProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCubeError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    State(#[from] InvalidCubeState),
}

/// Splits a net into the cube size and one color grid per face.
///
/// Trailing whitespace on each line and trailing empty lines are ignored.
pub fn parse_faces(text: &str) -> Result<(usize, CubeFaceData), LayoutError> {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let found = lines.len();
    if found % 3 != 0 || found < 6 {
        return Err(LayoutError::LineCount { found });
    }
    let n = found / 3;

    let mut faces: CubeFaceData = std::array::from_fn(|_| Vec::with_capacity(n * n));
    for (index, line) in lines.iter().enumerate() {
        let line_no = index + 1;
        let chars: Vec<char> = line.chars().collect();
        if (n..2 * n).contains(&index) {
            // the middle band
            if chars.len() != 4 * n {
                return Err(LayoutError::BadLine { line: line_no });
            }
            for (k, face) in [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .enumerate()
            {
                let start = k * n;
                push_colors(&mut faces[face as usize], &chars[start..start + n], line_no, start)?;
            }
        } else {
            if chars.len() != 2 * n || chars[..n].iter().any(|&c| c != ' ') {
                return Err(LayoutError::BadLine { line: line_no });
            }
            let face = if index < n { Face::Up } else { Face::Down };
            push_colors(&mut faces[face as usize], &chars[n..], line_no, n)?;
        }
    }

    Ok((n, faces))
}

fn push_colors(
    face: &mut FaceData,
    chars: &[char],
    line: usize,
    first_column: usize,
) -> Result<(), LayoutError> {
    for (i, &found) in chars.iter().enumerate() {
        let color = Color::from_char(found).ok_or(LayoutError::UnknownColor {
            line,
            column: first_column + i + 1,
            found,
        })?;
        face.push(color);
    }
    Ok(())
}

/// Builds a cube from per-face color grids.
///
/// Every corner and edge slot is detected before any error is returned, so the
/// error lists every bad slot. Piece counts are only checked when all slots
/// were recognised.
pub fn detect_cube(n: usize, faces: &CubeFaceData) -> Result<RubiksCube, InvalidCubeState> {
    let edge_index = n - 2;
    let mut problems = Vec::new();

    // stickers of each slot, gathered from the faces that show them
    let mut corner_stickers = [[Color::White; 3]; 8];
    let mut edge_stickers = vec![[Color::White; 2]; 12 * edge_index];
    for face in Face::iter() {
        let f = face as usize;
        let facing = face.axis();
        let grid = &faces[f];

        for (cell, slot) in corner_cells(n).into_iter().zip(FACE_CORNER_INDEXES[f]) {
            corner_stickers[slot][facing as usize] = grid[cell];
        }

        for side in Side::iter() {
            let position = FACE_EDGE_POSITION[facing as usize][side as usize];
            let Some(sticker) = position.state_of(facing) else {
                continue;
            };
            for j in 0..edge_index {
                let slot = edge_slot(f, side, j, edge_index);
                edge_stickers[slot][sticker as usize] = grid[side.cell(n, j)];
            }
        }

        if n == 3 && grid[4] != face.home_color() {
            problems.push(StateProblem::Center {
                face,
                found: grid[4],
            });
        }
    }

    let mut corners = SOLVED_CORNERS.map(CornerCubelet::solved);
    for (slot, colors) in corner_stickers.into_iter().enumerate() {
        let [up_down, front_back, right_left] = colors;
        match detect_corner(up_down, front_back, right_left, CORNER_SLOT_HANDEDNESS[slot]) {
            Some(corner) => corners[slot] = corner,
            None => problems.push(StateProblem::Corner { slot, colors }),
        }
    }

    let mut edges = Vec::with_capacity(edge_stickers.len());
    for (slot, colors) in edge_stickers.into_iter().enumerate() {
        let primary = colors[EdgeFacing::Normal as usize];
        let secondary = colors[EdgeFacing::Opposite as usize];
        match detect_edge(primary, secondary) {
            Some(edge) => edges.push(edge),
            None => problems.push(StateProblem::Edge { slot, colors }),
        }
    }

    let mut wings: Vec<WingCubelet> = Vec::new();
    if n > 3 {
        let m = n - 2;
        for face in Face::iter() {
            let grid = &faces[face as usize];
            for r in 0..m {
                for c in 0..m {
                    wings.push(detect_wing(grid[(r + 1) * n + c + 1], face));
                }
            }
        }
    }

    if problems.is_empty() {
        let cube = RubiksCube::from_parts(n, corners, edges, wings);
        problems = piece_count_problems(&cube);
        if problems.is_empty() {
            return Ok(cube);
        }
    }

    log::debug!(
        "rejected {n}x{n}x{n} state with {} problems",
        problems.len()
    );
    Err(InvalidCubeState { problems })
}

/// Checks that every identity appears as often as on a solved cube.
pub(crate) fn piece_count_problems(cube: &RubiksCube) -> Vec<StateProblem> {
    let mut problems = Vec::new();
    count_pieces::<CornerCubelet>(cube.corners(), 1, &mut problems);
    count_pieces::<EdgeCubelet>(cube.edges(), cube.edge_index(), &mut problems);
    count_pieces::<WingCubelet>(cube.wings(), cube.wing_index(), &mut problems);
    problems
}

fn count_pieces<C: Cubelet>(cubelets: &[C], expected: usize, problems: &mut Vec<StateProblem>) {
    let mut counts: FxHashMap<C::Piece, usize> = FxHashMap::default();
    for &cubelet in cubelets {
        *counts.entry(cubelet.piece()).or_default() += 1;
    }
    for piece in <C::Piece as IntoEnumIterator>::iter() {
        let found = counts.get(&piece).copied().unwrap_or(0);
        if found != expected {
            problems.push(StateProblem::PieceCount {
                piece: piece.to_string(),
                expected,
                found,
            });
        }
    }
}

/// Parses a net into a cube.
pub fn parse_cube(text: &str) -> Result<RubiksCube, ParseCubeError> {
    let (n, faces) = parse_faces(text).inspect_err(|err| log::debug!("bad net layout: {err}"))?;
    Ok(detect_cube(n, &faces)?)
}

impl FromStr for RubiksCube {
    type Err = ParseCubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cube(s)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::moves::{parse_moves, Move};

    const SOLVED_3X3: &str = "   www
   www
   www
bbbooogggrrr
bbbooogggrrr
bbbooogggrrr
   yyy
   yyy
   yyy
";

    /// Replaces the byte at (`line`, `column`), both 1-based.
    fn set_sticker(text: &str, line: usize, column: usize, color: char) -> String {
        text.lines()
            .enumerate()
            .map(|(i, l)| {
                if i + 1 == line {
                    let mut chars: Vec<char> = l.chars().collect();
                    chars[column - 1] = color;
                    chars.into_iter().collect()
                } else {
                    l.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_parse_solved_3x3() {
        assert_eq!(parse_cube(SOLVED_3X3), Ok(RubiksCube::new_solved(3)));
        assert_eq!(
            SOLVED_3X3.parse::<RubiksCube>(),
            Ok(RubiksCube::new_solved(3))
        );
    }

    #[test]
    fn test_trailing_whitespace_and_blank_lines() {
        let text = SOLVED_3X3.replace("www\n", "www      \n") + "\n\n";
        assert_eq!(parse_cube(&text), Ok(RubiksCube::new_solved(3)));
    }

    #[test]
    fn test_render_roundtrip() {
        for n in 2..=6 {
            let cube = RubiksCube::new_solved(n).apply_moves(&parse_moves("R U F' L D B'").unwrap());
            assert_eq!(parse_cube(&cube.to_string()), Ok(cube));
        }
    }

    #[test]
    fn test_line_count() {
        assert_eq!(
            parse_cube("   www\n   www\n"),
            Err(ParseCubeError::Layout(LayoutError::LineCount { found: 2 }))
        );
        assert_eq!(
            parse_cube("w\nw\nw\n"),
            Err(ParseCubeError::Layout(LayoutError::LineCount { found: 3 }))
        );
        assert_eq!(
            parse_cube(""),
            Err(ParseCubeError::Layout(LayoutError::LineCount { found: 0 }))
        );
    }

    #[test]
    fn test_bad_lines() {
        let short = SOLVED_3X3.replacen("bbbooogggrrr", "bbbooogggrr", 1);
        assert_eq!(
            parse_cube(&short),
            Err(ParseCubeError::Layout(LayoutError::BadLine { line: 4 }))
        );
        let unpadded = SOLVED_3X3.replacen("   yyy", "yyy   ", 1);
        assert_eq!(
            parse_cube(&unpadded),
            Err(ParseCubeError::Layout(LayoutError::BadLine { line: 7 }))
        );
    }

    #[test]
    fn test_unknown_color() {
        let text = set_sticker(SOLVED_3X3, 5, 7, 'x');
        assert_eq!(
            parse_cube(&text),
            Err(ParseCubeError::Layout(LayoutError::UnknownColor {
                line: 5,
                column: 7,
                found: 'x'
            }))
        );
        let text = set_sticker(SOLVED_3X3, 2, 4, 'W');
        assert_eq!(
            parse_cube(&text),
            Err(ParseCubeError::Layout(LayoutError::UnknownColor {
                line: 2,
                column: 4,
                found: 'W'
            }))
        );
    }

    #[test]
    fn test_unknown_color_counts_characters() {
        let text = set_sticker(SOLVED_3X3, 6, 2, 'é');
        assert_eq!(
            parse_cube(&text),
            Err(ParseCubeError::Layout(LayoutError::UnknownColor {
                line: 6,
                column: 2,
                found: 'é'
            }))
        );
        // the line is still 4N characters long, though not 4N bytes
        let text = set_sticker(SOLVED_3X3, 6, 12, 'é');
        assert_eq!(
            parse_cube(&text),
            Err(ParseCubeError::Layout(LayoutError::UnknownColor {
                line: 6,
                column: 12,
                found: 'é'
            }))
        );
    }

    #[test]
    fn test_impossible_corner() {
        // front-left-up sticker of the Up face becomes orange: the corner now
        // shows orange twice
        let text = set_sticker(SOLVED_3X3, 3, 4, 'o');
        let Err(ParseCubeError::State(state)) = parse_cube(&text) else {
            panic!("expected a state error");
        };
        assert_eq!(
            state.problems,
            vec![StateProblem::Corner {
                slot: 4,
                colors: [Color::Orange, Color::Orange, Color::Blue]
            }]
        );
    }

    #[test]
    fn test_mirrored_corner() {
        // swapping the front and right stickers of the up-front-right corner
        // mirrors it
        let text = set_sticker(SOLVED_3X3, 4, 6, 'g');
        let text = set_sticker(&text, 4, 7, 'o');
        let Err(ParseCubeError::State(state)) = parse_cube(&text) else {
            panic!("expected a state error");
        };
        assert!(matches!(
            state.problems.as_slice(),
            [StateProblem::Corner { slot: 0, .. }]
        ));
    }

    #[test]
    fn test_impossible_edge() {
        // no edge pairs red with orange
        let text = set_sticker(SOLVED_3X3, 3, 5, 'r');
        let Err(ParseCubeError::State(state)) = parse_cube(&text) else {
            panic!("expected a state error");
        };
        assert_eq!(
            state.problems,
            vec![StateProblem::Edge {
                slot: 8,
                colors: [Color::Red, Color::Orange]
            }]
        );
    }

    #[test]
    fn test_wrong_center() {
        let text = set_sticker(SOLVED_3X3, 5, 5, 'g');
        let Err(ParseCubeError::State(state)) = parse_cube(&text) else {
            panic!("expected a state error");
        };
        assert_eq!(
            state.problems,
            vec![StateProblem::Center {
                face: Face::Front,
                found: Color::Green
            }]
        );
    }

    #[test]
    fn test_duplicate_pieces() {
        // orientation parity is not checked, so a lone flipped edge parses
        let text = set_sticker(SOLVED_3X3, 3, 5, 'o');
        let text = set_sticker(&text, 4, 5, 'w');
        assert!(parse_cube(&text).is_ok());

        // the up-back edge turned into a second white-orange edge
        let text = set_sticker(SOLVED_3X3, 4, 11, 'o');
        let Err(ParseCubeError::State(state)) = parse_cube(&text) else {
            panic!("expected a state error");
        };
        assert_eq!(
            state.problems,
            vec![
                StateProblem::PieceCount {
                    piece: "EdgeWhiteOrange".to_string(),
                    expected: 1,
                    found: 2
                },
                StateProblem::PieceCount {
                    piece: "EdgeWhiteRed".to_string(),
                    expected: 1,
                    found: 0
                },
            ]
        );
    }

    #[test]
    fn test_problems_are_aggregated() {
        let text = set_sticker(SOLVED_3X3, 5, 5, 'g');
        let text = set_sticker(&text, 3, 5, 'r');
        let text = set_sticker(&text, 3, 4, 'o');
        let Err(ParseCubeError::State(state)) = parse_cube(&text) else {
            panic!("expected a state error");
        };
        assert_eq!(
            state.problems,
            vec![
                StateProblem::Center {
                    face: Face::Front,
                    found: Color::Green
                },
                StateProblem::Corner {
                    slot: 4,
                    colors: [Color::Orange, Color::Orange, Color::Blue]
                },
                StateProblem::Edge {
                    slot: 8,
                    colors: [Color::Red, Color::Orange]
                },
            ]
        );
        let message = ParseCubeError::State(state).to_string();
        assert!(message.starts_with("invalid cube state: "), "{message}");
    }

    #[test]
    fn test_swapped_wings_follow_face_turns() {
        // a green wing on Up and a white wing on Right is still a full set
        let solved = RubiksCube::new_solved(4).to_string();
        let text = set_sticker(&solved, 2, 6, 'g');
        let text = set_sticker(&text, 6, 10, 'w');
        let cube = parse_cube(&text).unwrap();
        assert!(!cube.is_solved());

        let turned = cube.apply_move(Move::Up);
        let up = turned.face(Face::Up);
        // clockwise: grid cell (1, 1) moves to (1, 2)
        assert_eq!(up[4 + 2], Color::Green);
        assert_eq!(up[4 + 1], Color::White);
        assert_eq!(turned.apply_move(Move::UpPrime), cube);
    }

    #[test]
    fn test_wing_counts() {
        let solved = RubiksCube::new_solved(4).to_string();
        let text = set_sticker(&solved, 2, 6, 'g');
        let Err(ParseCubeError::State(state)) = parse_cube(&text) else {
            panic!("expected a state error");
        };
        assert_eq!(
            state.problems,
            vec![
                StateProblem::PieceCount {
                    piece: "WingWhite".to_string(),
                    expected: 4,
                    found: 3
                },
                StateProblem::PieceCount {
                    piece: "WingGreen".to_string(),
                    expected: 4,
                    found: 5
                },
            ]
        );
    }

    fn arb_move() -> impl Strategy<Value = Move> {
        (0u8..12).prop_map(|i| Move::from_repr(i).unwrap())
    }

    proptest! {
        #[test]
        fn proptest_parse_render_roundtrip(
            n in 2usize..=6,
            scramble in prop::collection::vec(arb_move(), 0..25),
        ) {
            let cube = RubiksCube::new_solved(n).apply_moves(&scramble);
            let text = cube.to_string();
            let parsed = parse_cube(&text).unwrap();
            prop_assert_eq!(&parsed, &cube);
            prop_assert_eq!(parsed.to_string(), text);
        }
    }
}
