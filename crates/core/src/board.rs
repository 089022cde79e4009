//! Board module - manages the voxel pit
//!
//! The pit is `width x height x depth` cells, each empty or holding a color.
//! Cells live in one flat vector in layer, row, column order so a whole layer
//! is a contiguous slice. Clearing a layer drains that slice and appends a
//! fresh empty layer on top; the layer count never changes.
//! Coordinates: (x, y, z) where y = 0 is the floor.

use serde::Serialize;

use crate::shape::Shape;
use crate::types::{Cell, ColorId, Dimensions};

/// The playfield - fixed extents for one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    dims: Dimensions,
    /// Flat array of cells, index = (y * depth + z) * width + x
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cell_count()],
        }
    }

    /// Calculate flat index from (x, y, z) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.is_inside(x, y, z) {
            return None;
        }
        let (w, d) = (self.dims.width as usize, self.dims.depth as usize);
        Some((y as usize * d + z as usize) * w + x as usize)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> u8 {
        self.dims.width
    }

    pub fn height(&self) -> u8 {
        self.dims.height
    }

    pub fn depth(&self) -> u8 {
        self.dims.depth
    }

    /// Number of layers currently stored (always equals `height`).
    pub fn layer_count(&self) -> usize {
        match self.dims.layer_len() {
            0 => self.dims.height as usize,
            len => self.cells.len() / len,
        }
    }

    /// True iff `0 <= x < width`, `0 <= y < height` and `0 <= z < depth`.
    pub fn is_inside(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && x < self.dims.width as i32
            && y >= 0
            && y < self.dims.height as i32
            && z >= 0
            && z < self.dims.depth as i32
    }

    /// Get cell at (x, y, z); `None` if out of bounds
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<Cell> {
        self.index(x, y, z).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y, z); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, z: i32, cell: Cell) -> bool {
        match self.index(x, y, z) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        matches!(self.get(x, y, z), Some(Some(_)))
    }

    /// Check whether `shape` anchored at `(px, py, pz)` hits a wall, the floor,
    /// the ceiling or a locked voxel.
    ///
    /// Flat storage means a missing layer or row is just another out-of-bounds
    /// index, so the bounds check covers both.
    pub fn collides(&self, shape: &Shape, px: i32, py: i32, pz: i32) -> bool {
        shape.cells().any(|(ox, oy, oz)| {
            let (x, y, z) = (px + ox, py + oy, pz + oz);
            !matches!(self.get(x, y, z), Some(None))
        })
    }

    /// Write `color` into every occupied cell of `shape` at the anchor.
    ///
    /// Cells outside the pit are skipped; callers validate with
    /// [`Board::collides`] first.
    pub fn place(&mut self, shape: &Shape, px: i32, py: i32, pz: i32, color: ColorId) {
        for (ox, oy, oz) in shape.cells() {
            self.set(px + ox, py + oy, pz + oz, Some(color));
        }
    }

    /// Check if every cell of layer `y` is filled
    pub fn is_layer_full(&self, y: usize) -> bool {
        self.layer(y)
            .map(|layer| layer.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of layer `y`, rows of `width` cells each.
    pub fn layer(&self, y: usize) -> Option<&[Cell]> {
        let len = self.dims.layer_len();
        if y >= self.dims.height as usize || len == 0 {
            return None;
        }
        let start = y * len;
        self.cells.get(start..start + len)
    }

    /// Remove every full layer and return how many were cleared.
    ///
    /// Scans bottom-up. After removing layer `y` everything above has shifted
    /// down, so `y` is examined again before moving on.
    pub fn clear_lines(&mut self) -> usize {
        let len = self.dims.layer_len();
        if len == 0 {
            return 0;
        }

        let mut cleared = 0;
        let mut y = 0;
        while y < self.dims.height as usize {
            if self.is_layer_full(y) {
                let start = y * len;
                self.cells.drain(start..start + len);
                self.cells.extend(std::iter::repeat(None).take(len));
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Height of the stack in column (x, z): one above the topmost filled
    /// layer, 0 when the column is empty.
    pub fn column_height(&self, x: i32, z: i32) -> usize {
        (0..self.dims.height as i32)
            .rev()
            .find(|&y| self.is_occupied(x, y, z))
            .map(|y| y as usize + 1)
            .unwrap_or(0)
    }

    /// Number of filled cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::CLASSIC)
    }
}
