use egui::{Color32, Pos2};

use super::Render;
use crate::surface::Surface;

/// A freehand marker line.
///
/// Points are kept in drawing order. A stroke with fewer than two points is valid
/// but renders nothing.
#[derive(Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>, thickness: f32, color: Color32) -> Self {
        Self {
            points,
            thickness,
            color,
        }
    }

    /// Start a stroke at `start`, the way a pointer-down does
    pub fn begin(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self::new(vec![start], thickness, color)
    }

    /// Append a point to a stroke that is still being drawn
    pub(crate) fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Render for Stroke {
    fn render(&self, surface: &mut dyn Surface) {
        if self.points.len() < 2 {
            return;
        }
        surface.polyline(&self.points, self.thickness, self.color);
    }
}
