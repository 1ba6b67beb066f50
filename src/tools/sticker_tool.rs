use egui::Pos2;

use crate::drawable::{Drawable, Sticker};
use crate::renderer::Preview;
use crate::tools::{Tool, ToolState};

/// Places the current sticker where the pointer is pressed. There is no drag phase.
#[derive(Debug, Default)]
pub struct StickerTool {
    hover: Option<Pos2>,
}

impl StickerTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn sticker_at(pos: Pos2, tools: &ToolState) -> Option<Sticker> {
        if tools.sticker().is_empty() {
            return None;
        }
        Some(Sticker::new(
            pos,
            tools.sticker(),
            tools.rotation(),
            tools.sticker_size(),
        ))
    }
}

impl Tool for StickerTool {
    fn name(&self) -> &'static str {
        "Sticker"
    }

    fn on_pointer_down(&mut self, pos: Pos2, tools: &ToolState) -> Option<Drawable> {
        self.hover = Some(pos);
        Self::sticker_at(pos, tools).map(Drawable::Sticker)
    }

    fn on_pointer_move(&mut self, pos: Pos2, _tools: &ToolState) -> Option<Drawable> {
        self.hover = Some(pos);
        None
    }

    fn on_pointer_up(&mut self, pos: Pos2, _tools: &ToolState) -> Option<Drawable> {
        self.hover = Some(pos);
        None
    }

    fn on_pointer_leave(&mut self, _tools: &ToolState) -> Option<Drawable> {
        self.hover = None;
        None
    }

    fn deactivate(&mut self) -> Option<Drawable> {
        self.hover = None;
        None
    }

    fn preview(&self, tools: &ToolState) -> Option<Preview> {
        let pos = self.hover?;
        Self::sticker_at(pos, tools).map(Preview::StickerGhost)
    }
}
