use egui::{Color32, Pos2};

use super::Render;
use crate::surface::Surface;

/// A glyph placed on the canvas
#[derive(Debug, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: String,
    /// Radians; any real value, the rotation wraps naturally
    rotation: f32,
    size: f32,
}

impl Sticker {
    /// Color committed stickers are painted with
    pub const INK: Color32 = Color32::BLACK;

    pub fn new(position: Pos2, glyph: impl Into<String>, rotation: f32, size: f32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            rotation,
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Paint this sticker with an arbitrary color (used for the translucent ghost)
    pub(crate) fn render_tinted(&self, surface: &mut dyn Surface, color: Color32) {
        surface.glyph(self.position, &self.glyph, self.size, self.rotation, color);
    }
}

impl Render for Sticker {
    fn render(&self, surface: &mut dyn Surface) {
        self.render_tinted(surface, Self::INK);
    }
}
