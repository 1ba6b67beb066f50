use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

use super::Surface;

/// Background of the on-screen canvas
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Paints onto an egui [`Painter`], offsetting surface-local coordinates into `rect`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    /// Create a surface whose origin is the top-left corner of `rect`.
    ///
    /// Painting is clipped to `rect`.
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        // egui repaints every frame from scratch, so clearing means filling the background.
        self.painter.rect_filled(self.rect, 0.0, CANVAS_BACKGROUND);
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let screen_points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        let radius = thickness / 2.0;

        let clipped = self.painter.with_clip_rect(self.rect);
        clipped.add(Shape::line(
            screen_points.clone(),
            EguiStroke::new(thickness, color),
        ));

        // egui lines have butt caps and miter joins; discs on every vertex round both off.
        for point in screen_points {
            clipped.circle_filled(point, radius, color);
        }
    }

    fn circle(&mut self, center: Pos2, radius: f32, stroke_width: f32, color: Color32) {
        self.painter.with_clip_rect(self.rect).circle_stroke(
            self.to_screen(center),
            radius,
            EguiStroke::new(stroke_width, color),
        );
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, angle: f32, color: Color32) {
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(size), color);

        // TextShape rotates about its top-left corner, so shift that corner so the
        // rotated galley stays centered on `center`.
        let half = galley.size() / 2.0;
        let top_left = self.to_screen(center) - Rot2::from_angle(angle) * half;

        self.painter
            .with_clip_rect(self.rect)
            .add(TextShape::new(top_left, galley, color).with_angle(angle));
    }
}
