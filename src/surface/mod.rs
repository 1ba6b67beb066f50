//! Drawing surfaces that drawables and previews paint onto.
//!
//! All coordinates handed to a [`Surface`] are surface-local logical pixels with the
//! origin at the top-left corner of the canvas. Each implementation maps them onto
//! its own target (screen space, or a scaled offscreen raster).

use egui::{Color32, Pos2};

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::RasterSurface;

/// A 2D target that can be cleared and painted with lines, circles and text.
pub trait Surface {
    /// Erase everything painted so far
    fn clear(&mut self);

    /// Paint one continuous line through `points` with round joins and caps.
    ///
    /// Callers pass at least two points.
    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Paint a circle outline
    fn circle(&mut self, center: Pos2, radius: f32, stroke_width: f32, color: Color32);

    /// Paint `text` centered on `center`, rotated by `angle` radians about `center`
    fn glyph(&mut self, center: Pos2, text: &str, size: f32, angle: f32, color: Color32);
}
