//! PitView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! The 3D pit is drawn as two orthographic views side by side:
//!
//! - **TOP**: looking down the pit (x across, z down the screen). Each column
//!   shows the color of its stack height; the active piece is drawn over it.
//! - **FRONT**: looking along z (x across, y up). Depth collapses onto the
//!   nearest locked voxel, shaded darker the further back it sits; the ghost
//!   marks where a hard drop would land.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Dimensions, EngineState};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns reserved for the side panel.
const PANEL_W: u16 = 14;
/// Blank columns between frames.
const GAP: u16 = 2;

const BG: Rgb = Rgb::new(20, 20, 28);
const BORDER: Rgb = Rgb::new(0, 200, 0);
const LABEL: Rgb = Rgb::new(0, 220, 0);
const VALUE: Rgb = Rgb::new(200, 200, 200);

/// Screen positions of the frames for one pit size and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitLayout {
    /// Top-left corner (border included) of the TOP frame.
    pub top: (u16, u16),
    /// Top-left corner (border included) of the FRONT frame.
    pub front: (u16, u16),
    /// Left column of the side panel.
    pub panel_x: u16,
    /// Row of the view titles, one above the frames.
    pub title_y: u16,
    pub top_size: (u16, u16),
    pub front_size: (u16, u16),
}

/// Terminal renderer for the voxel pit.
pub struct PitView {
    /// Voxel width in terminal columns.
    cell_w: u16,
}

impl Default for PitView {
    fn default() -> Self {
        // 2 columns per voxel compensates for typical glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl PitView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Frame placement, centered in the viewport.
    pub fn layout(&self, dims: Dimensions, viewport: Viewport) -> PitLayout {
        let inner_w = dims.width as u16 * self.cell_w;
        let top_size = (inner_w + 2, dims.depth as u16 + 2);
        let front_size = (inner_w + 2, dims.height as u16 + 2);

        let total_w = top_size.0 + GAP + front_size.0 + GAP + PANEL_W;
        let total_h = 1 + top_size.1.max(front_size.1);
        let x0 = viewport.width.saturating_sub(total_w) / 2;
        let y0 = viewport.height.saturating_sub(total_h) / 2;

        let front_x = x0 + top_size.0 + GAP;
        PitLayout {
            top: (x0, y0 + 1),
            front: (front_x, y0 + 1),
            panel_x: front_x + front_size.0 + GAP,
            title_y: y0,
            top_size,
            front_size,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.dimensions(), viewport);
        let border = CellStyle::fg(BORDER);
        let title = CellStyle {
            bold: true,
            ..CellStyle::fg(LABEL)
        };

        fb.put_str(layout.top.0 + 1, layout.title_y, "TOP", title);
        fb.put_str(layout.front.0 + 1, layout.title_y, "FRONT", title);
        draw_border(fb, layout.top, layout.top_size, border);
        draw_border(fb, layout.front, layout.front_size, border);

        self.draw_top(fb, snap, layout.top);
        self.draw_front(fb, snap, layout.front);
        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.state {
            EngineState::Menu => {
                self.draw_overlay(fb, layout, &["3D BLOCKS", "ENTER to start"]);
            }
            EngineState::Paused => {
                self.draw_overlay(fb, layout, &["PAUSED", "P resume  B menu"]);
            }
            EngineState::GameOver => {
                self.draw_overlay(fb, layout, &["GAME OVER", "ENTER retry  B menu"]);
            }
            EngineState::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_top(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: (u16, u16)) {
        let board = &snap.board;
        let layers = board.height() as usize;

        for z in 0..board.depth() as i32 {
            for x in 0..board.width() as i32 {
                let h = board.column_height(x, z);
                let (ch, style) = if h == 0 {
                    ('·', empty_style())
                } else {
                    ('█', solid(layer_color(h - 1, layers)))
                };
                self.fill_voxel(fb, origin, x as u16, z as u16, ch, style);
            }
        }

        if let Some(active) = &snap.active {
            let style = CellStyle {
                bold: true,
                ..solid(Rgb::from_color_id(active.color))
            };
            for (x, _, z) in active.blocks() {
                if x >= 0 && x < board.width() as i32 && z >= 0 && z < board.depth() as i32 {
                    self.fill_voxel(fb, origin, x as u16, z as u16, '▓', style);
                }
            }
        }
    }

    fn draw_front(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: (u16, u16)) {
        let board = &snap.board;
        let (w, h, d) = (board.width() as i32, board.height() as i32, board.depth() as i32);
        let row = |y: i32| (h - 1 - y) as u16;

        for y in 0..h {
            for x in 0..w {
                // nearest voxel to the viewer sits at the highest z
                let front = (0..d)
                    .rev()
                    .find_map(|z| board.get(x, y, z).flatten().map(|color| (z, color)));
                let (ch, style) = match front {
                    Some((z, color)) => {
                        let rgb = Rgb::from_color_id(color).scale((d + z + 1) as u16, (2 * d) as u16);
                        ('█', solid(rgb))
                    }
                    None => ('·', empty_style()),
                };
                self.fill_voxel(fb, origin, x as u16, row(y), ch, style);
            }
        }

        let Some(active) = &snap.active else {
            return;
        };
        let in_view = |x: i32, y: i32| x >= 0 && x < w && y >= 0 && y < h;

        if let Some(ghost_y) = snap.ghost_y {
            let style = CellStyle {
                dim: true,
                ..solid(Rgb::from_color_id(active.color))
            };
            let dy = ghost_y - active.y;
            for (x, y, _) in active.blocks() {
                let gy = y + dy;
                if in_view(x, gy) {
                    self.fill_voxel(fb, origin, x as u16, row(gy), '░', style);
                }
            }
        }

        let style = CellStyle {
            bold: true,
            ..solid(Rgb::from_color_id(active.color))
        };
        for (x, y, _) in active.blocks() {
            if in_view(x, y) {
                self.fill_voxel(fb, origin, x as u16, row(y), '█', style);
            }
        }
    }

    fn fill_voxel(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.0 + 1 + col * self.cell_w;
        let py = origin.1 + 1 + row;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: PitLayout,
    ) {
        let x = layout.panel_x;
        if x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::fg(LABEL)
        };
        let value = CellStyle::fg(VALUE);

        let mut y = layout.top.1;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(x, y, "HIGH", label);
        fb.put_u32(x, y + 1, snap.high_score, value);
        y += 3;

        fb.put_str(x, y, "SPEED", label);
        let len = fb.put_u32(x, y + 1, snap.drop_interval_ms, value);
        fb.put_str(x + len, y + 1, "ms", value);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        y += self.draw_preview(fb, x, y, snap.next.as_ref(), false);
        y += 1;

        fb.put_str(x, y, "HOLD", label);
        y += 1;
        y += self.draw_preview(fb, x, y, snap.held.as_ref(), !snap.can_hold);
        y += 1;

        fb.put_str(x, y, "SOUND", label);
        fb.put_str(x, y + 1, if snap.muted { "OFF" } else { "ON" }, value);
    }

    /// Footprint of `piece` as seen from above; returns the rows used.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        piece: Option<&Piece>,
        dim: bool,
    ) -> u16 {
        let Some(piece) = piece else {
            fb.put_str(x, y, "-", CellStyle::fg(VALUE));
            return 1;
        };

        let style = CellStyle {
            dim,
            ..CellStyle::fg(Rgb::from_color_id(piece.color))
        };
        let footprint = piece.shape.footprint();
        for (dz, row) in footprint.iter().enumerate() {
            for (dx, filled) in row.iter().enumerate() {
                if *filled {
                    let px = x + dx as u16 * self.cell_w;
                    fb.fill_rect(px, y + dz as u16, self.cell_w, 1, '█', style);
                }
            }
        }
        footprint.len() as u16
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: PitLayout, lines: &[&str]) {
        let left = layout.top.0;
        let right = layout.front.0 + layout.front_size.0;
        let span = right - left;
        let tall = layout.top_size.1.max(layout.front_size.1);
        let mid_y = layout.top.1 + tall / 2;
        let first_y = mid_y.saturating_sub(lines.len() as u16 / 2);

        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = left + span.saturating_sub(text_w) / 2;
            fb.put_str(x, first_y + i as u16, text, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, (x, y): (u16, u16), (w, h): (u16, u16), style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn solid(fg: Rgb) -> CellStyle {
    CellStyle {
        fg,
        bg: BG,
        bold: false,
        dim: false,
    }
}

fn empty_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(0, 60, 0),
        bg: BG,
        bold: false,
        dim: true,
    }
}

/// Rainbow gradient from the floor (red) to the ceiling (magenta).
pub fn layer_color(layer: usize, layers: usize) -> Rgb {
    let hue = (layer.min(layers) * 300 / layers.max(1)) as u32;
    hue_to_rgb(hue)
}

fn hue_to_rgb(hue: u32) -> Rgb {
    let h = hue % 360;
    let f = ((h % 60) * 255 / 60) as u8;
    let q = 255 - f;
    let (r, g, b) = match h / 60 {
        0 => (255, f, 0),
        1 => (q, 255, 0),
        2 => (0, 255, f),
        3 => (0, q, 255),
        4 => (f, 0, 255),
        _ => (255, 0, q),
    };
    Rgb::new(r, g, b)
}
