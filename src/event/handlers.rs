use crate::event::{CanvasEvent, EventHandler};

/// Asks egui for a new frame whenever the canvas changes
#[derive(Debug)]
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, _event: &CanvasEvent) {
        self.ctx.request_repaint();
    }
}

/// Logs history and tool changes; pointer-rate events are left out
#[derive(Debug, Default)]
pub struct EventLogger;

impl EventHandler for EventLogger {
    fn handle_event(&mut self, event: &CanvasEvent) {
        match event {
            CanvasEvent::HistoryChanged(change) => log::debug!("history: {change:?}"),
            CanvasEvent::ToolChanged(change) => log::info!("tool: {change:?}"),
            CanvasEvent::StrokeExtended { .. } | CanvasEvent::PreviewChanged => {}
        }
    }
}
