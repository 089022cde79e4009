//! Pieces module - polycube catalog and the falling piece
//!
//! The catalog is fixed. A new piece picks one entry uniformly through a
//! [`RandomSource`] and copies its shape, so rotating a piece never touches
//! the catalog.

use serde::Serialize;

use crate::rng::RandomSource;
use crate::shape::Shape;
use crate::types::{Axis, ColorId};

/// Catalog entry: extents as (layers, rows, columns) plus a flat 0/1 mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub name: &'static str,
    pub extents: (usize, usize, usize),
    pub mask: &'static [u8],
    pub color: ColorId,
}

impl PieceDef {
    /// Fresh copy of the catalog shape.
    pub fn shape(&self) -> Shape {
        let (h, d, w) = self.extents;
        // Catalog masks are checked by `test_catalog_shapes_are_valid`.
        Shape::from_flat(h, d, w, self.mask).expect("catalog mask matches its extents")
    }
}

pub const CATALOG: [PieceDef; 4] = [
    PieceDef {
        name: "bar",
        extents: (1, 1, 3),
        mask: &[1, 1, 1],
        color: 0x00ffff,
    },
    PieceDef {
        name: "square",
        extents: (1, 2, 2),
        mask: &[
            1, 1, //
            1, 1,
        ],
        color: 0xffff00,
    },
    PieceDef {
        name: "ell",
        extents: (1, 3, 2),
        mask: &[
            1, 0, //
            1, 0, //
            1, 1,
        ],
        color: 0xff8800,
    },
    PieceDef {
        name: "tee",
        // Second layer is empty; it still counts towards the extents.
        extents: (2, 2, 3),
        mask: &[
            0, 1, 0, //
            1, 1, 1, //
            0, 0, 0, //
            0, 0, 0,
        ],
        color: 0xaa00ff,
    },
];

/// Position a piece starts at before the engine centers it.
pub const DEFAULT_ANCHOR: (i32, i32, i32) = (4, 8, 4);

/// The falling piece: shape, color and integer anchor.
///
/// The anchor may be out of range until a collision check has validated it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub name: &'static str,
    pub shape: Shape,
    pub color: ColorId,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Piece {
    pub fn from_def(def: &PieceDef) -> Self {
        let (x, y, z) = DEFAULT_ANCHOR;
        Self {
            name: def.name,
            shape: def.shape(),
            color: def.color,
            x,
            y,
            z,
        }
    }

    /// Draw a catalog entry uniformly at random.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let pick = rng.next_range(CATALOG.len() as u32) as usize;
        Self::from_def(&CATALOG[pick % CATALOG.len()])
    }

    /// Shape this piece would have after rotating; the piece itself is untouched.
    pub fn rotated(&self, axis: Axis, clockwise: bool) -> Shape {
        self.shape.rotate(axis, clockwise)
    }

    /// Absolute coordinates of every block.
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(ox, oy, oz)| (self.x + ox, self.y + oy, self.z + oz))
    }
}
