//! Binary save and load of cube states.
//!
//! Format (little endian):
//! - 4 bytes: magic `NXC1`
//! - u32: cube size N
//! - 8 bytes: packed corners, in slot order
//! - 12 * (N - 2) bytes: packed edges, line by line
//! - 6 * wing_index bytes: packed wings, face by face

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::corner::CornerCubelet;
use crate::cube::RubiksCube;
use crate::layout::SOLVED_CORNERS;
use crate::parse::{piece_count_problems, InvalidCubeState};
use crate::Cubelet;

const MAGIC: &[u8; 4] = b"NXC1";
const HEADER_LEN: usize = 8;

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("not a cube state file")]
    BadMagic,
    #[error("unsupported cube size {0}")]
    BadSize(u32),
    #[error("expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("{extra} unexpected bytes after the cube state")]
    TrailingBytes { extra: usize },
    #[error("invalid cubelet byte at offset {index}")]
    BadCubelet { index: usize },
    #[error(transparent)]
    State(#[from] InvalidCubeState),
}

/// Packs a cube into its binary form.
pub fn encode(cube: &RubiksCube) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        HEADER_LEN + cube.corners().len() + cube.edges().len() + cube.wings().len(),
    );
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&(cube.size() as u32).to_le_bytes());
    bytes.extend(cube.corners().iter().map(|c| c.to_bits()));
    bytes.extend(cube.edges().iter().map(|e| e.to_bits()));
    bytes.extend(cube.wings().iter().map(|w| w.to_bits()));
    bytes
}

/// Unpacks a cube written by [`encode`].
///
/// Every byte is validated, and the piece counts must match a real cube.
pub fn decode(bytes: &[u8]) -> Result<RubiksCube, DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::Truncated {
            expected: HEADER_LEN,
            found: bytes.len(),
        });
    }
    if &bytes[..4] != MAGIC {
        return Err(DecodeError::BadMagic);
    }
    let mut size = [0u8; 4];
    size.copy_from_slice(&bytes[4..HEADER_LEN]);
    let size = u32::from_le_bytes(size);

    let (n, edge_count, wing_count) = body_layout(size).ok_or(DecodeError::BadSize(size))?;
    let expected = HEADER_LEN + 8 + edge_count + wing_count;
    if bytes.len() < expected {
        return Err(DecodeError::Truncated {
            expected,
            found: bytes.len(),
        });
    }
    if bytes.len() > expected {
        return Err(DecodeError::TrailingBytes {
            extra: bytes.len() - expected,
        });
    }

    let mut offset = HEADER_LEN;
    let corners: Vec<CornerCubelet> = read_cubelets(bytes, &mut offset, 8)?;
    let edges = read_cubelets(bytes, &mut offset, edge_count)?;
    let wings = read_cubelets(bytes, &mut offset, wing_count)?;

    let mut corner_array = SOLVED_CORNERS.map(CornerCubelet::solved);
    corner_array.copy_from_slice(&corners);
    let cube = RubiksCube::from_parts(n, corner_array, edges, wings);

    let problems = piece_count_problems(&cube);
    if !problems.is_empty() {
        return Err(InvalidCubeState { problems }.into());
    }
    log::debug!("decoded {n}x{n}x{n} cube from {} bytes", bytes.len());
    Ok(cube)
}

/// Returns `(n, edge bytes, wing bytes)` for a stored size, or `None` if the
/// size is below 2 or the body would not fit in memory.
fn body_layout(size: u32) -> Option<(usize, usize, usize)> {
    let n = usize::try_from(size).ok()?;
    if n < 2 {
        return None;
    }
    let edge_index = n - 2;
    let wing_index = if n == 3 {
        0
    } else {
        edge_index.checked_mul(edge_index)?
    };
    let edges = edge_index.checked_mul(12)?;
    let wings = wing_index.checked_mul(6)?;
    // the whole file length must fit as well
    edges.checked_add(wings)?.checked_add(HEADER_LEN + 8)?;
    Some((n, edges, wings))
}

fn read_cubelets<C: Cubelet>(
    bytes: &[u8],
    offset: &mut usize,
    count: usize,
) -> Result<Vec<C>, DecodeError> {
    let start = *offset;
    let cubelets = bytes[start..start + count]
        .iter()
        .enumerate()
        .map(|(i, &bits)| C::from_bits(bits).ok_or(DecodeError::BadCubelet { index: start + i }))
        .collect::<Result<Vec<_>, _>>()?;
    *offset += count;
    Ok(cubelets)
}

/// Writes a cube state to `path`.
pub fn save(cube: &RubiksCube, path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(&encode(cube))?;
    Ok(())
}

/// Reads a cube state from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<RubiksCube, DecodeError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    decode(&bytes)
}
