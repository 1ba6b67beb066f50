use crate::surface::Surface;

mod sticker;
mod stroke;

pub use sticker::Sticker;
pub use stroke::Stroke;

/// Anything that can paint itself onto a [`Surface`]
pub trait Render {
    fn render(&self, surface: &mut dyn Surface);
}

/// One committed visual action: the unit of undo, redo and rendering.
///
/// Not `Clone`: a drawable lives in exactly one container at a time, and moving it
/// between History's stacks is a move.
#[derive(Debug, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// Short name for logs and the history panel
    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(s) => Some(s),
            Drawable::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(s) => Some(s),
            Drawable::Stroke(_) => None,
        }
    }
}

impl Render for Drawable {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(s) => s.render(surface),
            Drawable::Sticker(s) => s.render(surface),
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Drawable::Sticker(sticker)
    }
}

/// Factory functions for creating drawables
pub mod factory {
    use super::*;
    use egui::{Color32, Pos2};

    /// Create a stroke drawable
    pub fn create_stroke(points: Vec<Pos2>, thickness: f32, color: Color32) -> Drawable {
        Drawable::Stroke(Stroke::new(points, thickness, color))
    }

    /// Create a sticker drawable
    pub fn create_sticker(
        position: Pos2,
        glyph: impl Into<String>,
        rotation: f32,
        size: f32,
    ) -> Drawable {
        Drawable::Sticker(Sticker::new(position, glyph, rotation, size))
    }
}
