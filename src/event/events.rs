use egui::Color32;

use crate::tools::ToolMode;

/// Something observable changed; the canvas needs repainting.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    HistoryChanged(HistoryEvent),
    ToolChanged(ToolEvent),
    /// The in-progress stroke gained a point
    StrokeExtended { points: usize },
    /// The preview (marker cursor or sticker ghost) moved, appeared or disappeared
    PreviewChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEvent {
    Committed { kind: &'static str },
    Undone { kind: &'static str },
    Redone { kind: &'static str },
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    ModeChanged(ToolMode),
    ThicknessChanged(f32),
    ColorChanged(Color32),
    /// Radians
    RotationChanged(f32),
    StickerSelected(String),
    StickerAdded(String),
}
