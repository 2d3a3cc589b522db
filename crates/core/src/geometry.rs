//! Geometry module - block offsets and bottom blocks per orientation
//!
//! Every piece kind owns two constant tables keyed by orientation:
//!
//! - the four `(column, row)` offsets of its blocks relative to the anchor
//! - the ordered block indices that face downward ("bottom blocks")
//!
//! The anchor is the marked corner of each shape below; offsets may be
//! negative for shapes that extend left of it.
//!
//! ```text
//! J, orientation 0      J, orientation 90     J, orientation 180    J, orientation 270
//!
//!  @ | 0 |               | 3@|                 | 2@| 3 |            | 0@| 1 | 2 |
//!    | 1 |               | 2 | 1 | 0 |         | 1 |                            | 3 |
//! | 3 | 2 |                                    | 0 |
//! ```

use blockfall_types::{Orientation, PieceKind, BLOCKS_PER_PIECE};

use crate::error::GeometryError;

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i16, i16);

/// The four block offsets of one orientation
pub type Shape = [BlockOffset; BLOCKS_PER_PIECE];

/// Block offsets for a piece kind and orientation
pub fn offsets(kind: PieceKind, orientation: Orientation) -> Shape {
    match kind {
        PieceKind::I => i_offsets(orientation),
        PieceKind::O => o_offsets(orientation),
        PieceKind::T => t_offsets(orientation),
        PieceKind::S => s_offsets(orientation),
        PieceKind::Z => z_offsets(orientation),
        PieceKind::J => j_offsets(orientation),
        PieceKind::L => l_offsets(orientation),
    }
}

/// Indices (into [`offsets`]) of the blocks with nothing of the piece below them
pub fn bottom_blocks(kind: PieceKind, orientation: Orientation) -> &'static [usize] {
    match kind {
        PieceKind::I => i_bottom(orientation),
        PieceKind::O => &[2, 3],
        PieceKind::T => t_bottom(orientation),
        PieceKind::S => s_bottom(orientation),
        PieceKind::Z => z_bottom(orientation),
        PieceKind::J => j_bottom(orientation),
        PieceKind::L => l_bottom(orientation),
    }
}

/// I piece: vertical at 0/180, horizontal at 90/270
fn i_offsets(orientation: Orientation) -> Shape {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (0, 2), (0, 3)],
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (1, 0), (2, 0)],
    }
}

fn i_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[3],
        Orientation::Ninety | Orientation::TwoSeventy => &[0, 1, 2, 3],
    }
}

/// O piece (same for all orientations)
fn o_offsets(_orientation: Orientation) -> Shape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

fn t_offsets(orientation: Orientation) -> Shape {
    match orientation {
        Orientation::Zero => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::Ninety => [(2, 1), (1, 0), (1, 1), (1, 2)],
        Orientation::OneEighty => [(1, 2), (0, 1), (1, 1), (2, 1)],
        Orientation::TwoSeventy => [(0, 1), (1, 0), (1, 1), (1, 2)],
    }
}

fn t_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[1, 2, 3],
        Orientation::Ninety => &[0, 3],
        Orientation::OneEighty => &[0, 1, 3],
        Orientation::TwoSeventy => &[0, 3],
    }
}

/// S piece: 0/180 and 90/270 share a footprint
fn s_offsets(orientation: Orientation) -> Shape {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (1, 1), (1, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(2, 0), (1, 0), (1, 1), (0, 1)],
    }
}

fn s_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[1, 3],
        Orientation::Ninety | Orientation::TwoSeventy => &[0, 2, 3],
    }
}

fn z_offsets(orientation: Orientation) -> Shape {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(1, 0), (1, 1), (0, 1), (0, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (0, 1), (1, 1)],
    }
}

fn z_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[1, 3],
        Orientation::Ninety | Orientation::TwoSeventy => &[0, 2, 3],
    }
}

fn j_offsets(orientation: Orientation) -> Shape {
    match orientation {
        Orientation::Zero => [(1, 0), (1, 1), (1, 2), (0, 2)],
        Orientation::Ninety => [(2, 1), (1, 1), (0, 1), (0, 0)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (1, 0)],
        Orientation::TwoSeventy => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

fn j_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[2, 3],
        Orientation::Ninety => &[0, 1, 2],
        Orientation::OneEighty => &[0, 3],
        Orientation::TwoSeventy => &[0, 1, 3],
    }
}

fn l_offsets(orientation: Orientation) -> Shape {
    match orientation {
        Orientation::Zero => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Orientation::Ninety => [(1, 1), (0, 1), (-1, 1), (-1, 2)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (-1, 0)],
        Orientation::TwoSeventy => [(-1, 1), (0, 1), (1, 1), (1, 0)],
    }
}

fn l_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[2, 3],
        Orientation::Ninety => &[0, 1, 3],
        Orientation::OneEighty => &[0, 3],
        Orientation::TwoSeventy => &[0, 1, 2],
    }
}

/// Check the whole table once at start-up
///
/// Every orientation of every kind must have four distinct offsets, and its
/// bottom-block list must be strictly increasing and name exactly the blocks
/// with no block of the same piece directly beneath them.
pub fn validate() -> Result<(), GeometryError> {
    for kind in PieceKind::ALL {
        for orientation in Orientation::ALL {
            validate_entry(kind, orientation)?;
        }
    }
    Ok(())
}

fn validate_entry(kind: PieceKind, orientation: Orientation) -> Result<(), GeometryError> {
    let shape = offsets(kind, orientation);
    for i in 0..shape.len() {
        for j in (i + 1)..shape.len() {
            if shape[i] == shape[j] {
                return Err(GeometryError::DuplicateOffset {
                    kind,
                    orientation,
                    offset: shape[i],
                });
            }
        }
    }

    let bottom = bottom_blocks(kind, orientation);
    if bottom.is_empty()
        || bottom.iter().any(|&idx| idx >= BLOCKS_PER_PIECE)
        || bottom.windows(2).any(|w| w[0] >= w[1])
    {
        return Err(GeometryError::MalformedBottomBlocks { kind, orientation });
    }

    let expected = (0..BLOCKS_PER_PIECE).filter(|&idx| {
        let (c, r) = shape[idx];
        !shape.contains(&(c, r + 1))
    });
    if !expected.eq(bottom.iter().copied()) {
        return Err(GeometryError::BottomBlocksMismatch { kind, orientation });
    }

    Ok(())
}
