//! TerminalFrontend: the engine's `Renderer` port for a terminal.
//!
//! Owns the pit view, a reusable framebuffer and the diffing renderer.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::terminal;

use crate::core::{GameSnapshot, Renderer};
use crate::fb::FrameBuffer;
use crate::pit_view::{PitView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalFrontend<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: PitView,
    fb: FrameBuffer,
    viewport: Viewport,
}

impl TerminalFrontend<io::Stdout> {
    /// Frontend on stdout, sized to the current terminal.
    pub fn new() -> Result<Self> {
        let (w, h) = terminal::size()?;
        Ok(Self::with_writer(io::stdout(), Viewport::new(w, h)))
    }
}

impl<W: Write> TerminalFrontend<W> {
    pub fn with_writer(out: W, viewport: Viewport) -> Self {
        Self {
            renderer: TerminalRenderer::with_writer(out),
            view: PitView::default(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Follow a terminal resize; the next frame is a full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.renderer.invalidate();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }
}

impl<W: Write> Renderer for TerminalFrontend<W> {
    type Error = anyhow::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.view.render_into(snapshot, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
