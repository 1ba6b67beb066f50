use egui::{Color32, Pos2};

use crate::drawable::{Render, Sticker, Stroke};
use crate::history::History;
use crate::state::CanvasState;
use crate::surface::Surface;

/// A render-only hint that follows the pointer. Never committed, never exported.
#[derive(Debug, PartialEq)]
pub enum Preview {
    /// Outline showing where and how wide the marker will draw
    MarkerCursor {
        position: Pos2,
        thickness: f32,
        color: Color32,
    },
    /// Translucent copy of the sticker that a press would place
    StickerGhost(Sticker),
}

impl Preview {
    /// Opacity factor of the sticker ghost
    pub const GHOST_OPACITY: f32 = 0.4;

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Preview::MarkerCursor {
                position,
                thickness,
                color,
            } => {
                let radius = (thickness / 2.0).max(1.0);
                surface.circle(*position, radius, 1.0, *color);
            }
            Preview::StickerGhost(sticker) => {
                sticker.render_tinted(surface, Sticker::INK.gamma_multiply(Self::GHOST_OPACITY));
            }
        }
    }
}

/// Replays the canvas onto a surface
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear `surface`, replay `history` oldest first, then the live stroke, then the
    /// preview on top. The preview is skipped while a stroke is in progress.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        history: &History,
        live_stroke: Option<&Stroke>,
        preview: Option<&Preview>,
    ) {
        surface.clear();

        for drawable in history.list() {
            drawable.render(surface);
        }

        if let Some(stroke) = live_stroke {
            stroke.render(surface);
        } else if let Some(preview) = preview {
            preview.render(surface);
        }
    }

    /// Render everything the canvas state currently shows
    pub fn render_frame(&self, surface: &mut dyn Surface, state: &CanvasState) {
        let preview = state.preview();
        self.render(surface, state.history(), state.live_stroke(), preview.as_ref());
    }
}
