//! Shape module - polycube occupancy and 90 degree axis rotation
//!
//! A shape is a rectangular box of `height x depth x width` slots stored in
//! layer, row, column order, like the board. Rotation is a pure function that
//! builds a new box; when the two extents of the rotated plane differ they
//! swap, so non-cubic shapes stay rectangular.
//!
//! Extents are named after the board axes: `height` is Y, `depth` is Z and
//! `width` is X.

use std::fmt;

use serde::Serialize;

use crate::types::Axis;

/// Reasons a nested occupancy array is not a valid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No layers, rows or columns at all.
    Empty,
    /// A layer has a different number of rows than the first layer.
    RaggedLayer { layer: usize },
    /// A row has a different number of columns than the first row.
    RaggedRow { layer: usize, row: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape has no cells"),
            ShapeError::RaggedLayer { layer } => {
                write!(f, "layer {layer} has a different row count")
            }
            ShapeError::RaggedRow { layer, row } => {
                write!(f, "row {row} of layer {layer} has a different column count")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Rectangular 3D occupancy mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    height: usize,
    depth: usize,
    width: usize,
    /// index = (y * depth + z) * width + x
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from a flat `0/1` buffer in layer, row, column order.
    ///
    /// Returns `None` when the buffer length does not match the extents.
    pub fn from_flat(height: usize, depth: usize, width: usize, data: &[u8]) -> Option<Self> {
        if height * depth * width == 0 || data.len() != height * depth * width {
            return None;
        }
        Some(Self {
            height,
            depth,
            width,
            cells: data.iter().map(|&v| v != 0).collect(),
        })
    }

    /// Build a shape from nested `[layer][row][column]` vectors, checking that
    /// every layer has the same row count and every row the same column count.
    pub fn from_layers(layers: Vec<Vec<Vec<bool>>>) -> Result<Self, ShapeError> {
        let height = layers.len();
        let depth = layers.first().map(Vec::len).unwrap_or(0);
        let width = layers
            .first()
            .and_then(|layer| layer.first())
            .map(Vec::len)
            .unwrap_or(0);
        if height == 0 || depth == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }

        let mut cells = Vec::with_capacity(height * depth * width);
        for (y, layer) in layers.into_iter().enumerate() {
            if layer.len() != depth {
                return Err(ShapeError::RaggedLayer { layer: y });
            }
            for (z, row) in layer.into_iter().enumerate() {
                if row.len() != width {
                    return Err(ShapeError::RaggedRow { layer: y, row: z });
                }
                cells.extend(row);
            }
        }

        Ok(Self {
            height,
            depth,
            width,
            cells,
        })
    }

    /// Nested `[layer][row][column]` view, the inverse of [`Shape::from_layers`].
    pub fn to_layers(&self) -> Vec<Vec<Vec<bool>>> {
        self.cells
            .chunks(self.depth * self.width)
            .map(|layer| layer.chunks(self.width).map(<[bool]>::to_vec).collect())
            .collect()
    }

    /// Layers (Y extent).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows per layer (Z extent).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Columns per row (X extent).
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.depth + z) * self.width + x
    }

    /// Is the slot at local offset (x, y, z) occupied? Out of range is `false`.
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.width && y < self.height && z < self.depth && self.cells[self.idx(x, y, z)]
    }

    /// Local offsets `(x, y, z)` of every occupied slot.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        let (w, d) = (self.width, self.depth);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| ((i % w) as i32, (i / (w * d)) as i32, ((i / w) % d) as i32))
    }

    /// Number of occupied slots.
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Projection onto the X-Z plane: `footprint[z][x]` is true when any layer
    /// is occupied at that row and column.
    pub fn footprint(&self) -> Vec<Vec<bool>> {
        (0..self.depth)
            .map(|z| {
                (0..self.width)
                    .map(|x| (0..self.height).any(|y| self.get(x, y, z)))
                    .collect()
            })
            .collect()
    }

    /// Rotate 90 degrees about `axis`.
    ///
    /// The preserved axis keeps its extent; the two extents of the rotated
    /// plane swap. Each target slot pulls from its source slot:
    ///
    /// | axis | cw source | ccw source |
    /// |------|-----------|------------|
    /// | X (y,z) | `(Y-1-z, y)` | `(z, Z-1-y)` |
    /// | Y (z,x) | `(Z-1-x, z)` | `(x, X-1-z)` |
    /// | Z (y,x) | `(Y-1-x, y)` | `(x, X-1-y)` |
    pub fn rotate(&self, axis: Axis, clockwise: bool) -> Shape {
        let (old_y, old_z, old_x) = (self.height, self.depth, self.width);
        let (height, depth, width) = match axis {
            Axis::X => (old_z, old_y, old_x),
            Axis::Y => (old_y, old_x, old_z),
            Axis::Z => (old_x, old_z, old_y),
        };

        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..height {
            for z in 0..depth {
                for x in 0..width {
                    // (x, y, z) of the source slot
                    let (sx, sy, sz) = match (axis, clockwise) {
                        (Axis::X, true) => (x, old_y - 1 - z, y),
                        (Axis::X, false) => (x, z, old_z - 1 - y),
                        (Axis::Y, true) => (z, y, old_z - 1 - x),
                        (Axis::Y, false) => (old_x - 1 - z, y, x),
                        (Axis::Z, true) => (y, old_y - 1 - x, z),
                        (Axis::Z, false) => (old_x - 1 - y, x, z),
                    };
                    cells.push(self.cells[self.idx(sx, sy, sz)]);
                }
            }
        }

        Shape {
            height,
            depth,
            width,
            cells,
        }
    }
}
