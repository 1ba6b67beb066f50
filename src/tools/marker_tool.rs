use egui::Pos2;

use crate::drawable::{Drawable, Stroke};
use crate::renderer::Preview;
use crate::tools::{Tool, ToolState};

/// Freehand marker: press, drag, release
#[derive(Debug, Default)]
pub struct MarkerTool {
    // Transient state: the stroke being drawn (if any)
    current_stroke: Option<Stroke>,
    hover: Option<Pos2>,
}

impl MarkerTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.current_stroke.is_some()
    }

    /// Hand over the stroke being drawn. Every started stroke holds at least its
    /// pointer-down point, so a plain click still yields a one-point stroke.
    fn finish_stroke(&mut self) -> Option<Drawable> {
        let stroke = self.current_stroke.take()?;
        if stroke.points().is_empty() {
            return None;
        }
        Some(Drawable::Stroke(stroke))
    }
}

impl Tool for MarkerTool {
    fn name(&self) -> &'static str {
        "Marker"
    }

    fn on_pointer_down(&mut self, pos: Pos2, tools: &ToolState) -> Option<Drawable> {
        // A press without a release in between cannot happen with one pointer, but
        // if it does, the old stroke is finished rather than lost.
        let finished = self.finish_stroke();
        self.current_stroke = Some(Stroke::begin(pos, tools.thickness(), tools.color()));
        self.hover = Some(pos);
        finished
    }

    fn on_pointer_move(&mut self, pos: Pos2, _tools: &ToolState) -> Option<Drawable> {
        self.hover = Some(pos);
        if let Some(stroke) = &mut self.current_stroke {
            stroke.add_point(pos);
        }
        None
    }

    fn on_pointer_up(&mut self, pos: Pos2, _tools: &ToolState) -> Option<Drawable> {
        self.hover = Some(pos);
        self.finish_stroke()
    }

    fn on_pointer_leave(&mut self, _tools: &ToolState) -> Option<Drawable> {
        self.hover = None;
        self.finish_stroke()
    }

    fn deactivate(&mut self) -> Option<Drawable> {
        self.hover = None;
        self.finish_stroke()
    }

    fn in_progress(&self) -> Option<&Stroke> {
        self.current_stroke.as_ref()
    }

    fn preview(&self, tools: &ToolState) -> Option<Preview> {
        if self.is_drawing() {
            return None;
        }
        self.hover.map(|position| Preview::MarkerCursor {
            position,
            thickness: tools.thickness(),
            color: tools.color(),
        })
    }
}
