use egui::Color32;

use crate::config::AppConfig;
use crate::drawable::Stroke;
use crate::event::{CanvasEvent, EventBus, HistoryEvent, ToolEvent};
use crate::history::History;
use crate::input::{InputController, InputEvent};
use crate::renderer::Preview;
use crate::tools::{ThicknessPreset, ToolMode, ToolState};

/// Everything the canvas knows, owned in one place for the whole session.
///
/// Every mutation goes through a method here and is announced on the event bus, so
/// subscribers (repaint, logging) never poll.
#[derive(Debug)]
pub struct CanvasState {
    config: AppConfig,
    history: History,
    tools: ToolState,
    controller: InputController,
    events: EventBus,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl CanvasState {
    pub fn new(config: AppConfig) -> Self {
        let tools = ToolState::from_config(&config);
        Self {
            controller: InputController::new(tools.mode()),
            tools,
            history: History::new(),
            events: EventBus::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// The stroke being drawn right now, not part of History
    pub fn live_stroke(&self) -> Option<&Stroke> {
        self.controller.live_stroke()
    }

    pub fn preview(&self) -> Option<Preview> {
        self.controller.preview(&self.tools)
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        self.controller
            .handle_event(event, &self.tools, &mut self.history, &self.events);
    }

    /// Returns true if something was undone. A stroke in progress is unaffected.
    pub fn undo(&mut self) -> bool {
        let Some(kind) = self.history.undo().map(|d| d.kind()) else {
            return false;
        };
        self.events
            .emit(CanvasEvent::HistoryChanged(HistoryEvent::Undone { kind }));
        true
    }

    /// Returns true if something was redone
    pub fn redo(&mut self) -> bool {
        let Some(kind) = self.history.redo().map(|d| d.kind()) else {
            return false;
        };
        self.events
            .emit(CanvasEvent::HistoryChanged(HistoryEvent::Redone { kind }));
        true
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.events
            .emit(CanvasEvent::HistoryChanged(HistoryEvent::Cleared));
    }

    /// Switch between marker and sticker. A stroke in progress is committed first.
    pub fn set_mode(&mut self, mode: ToolMode) {
        if self.tools.mode() == mode {
            return;
        }
        self.controller
            .switch_mode(mode, &mut self.history, &self.events);
        self.tools.set_mode(mode);
        self.events
            .emit(CanvasEvent::ToolChanged(ToolEvent::ModeChanged(mode)));
    }

    pub fn select_thickness(&mut self, preset: ThicknessPreset) {
        let thickness = self.tools.select_thickness(preset);
        self.events
            .emit(CanvasEvent::ToolChanged(ToolEvent::ThicknessChanged(thickness)));
    }

    pub fn set_color(&mut self, color: Color32) {
        if self.tools.color() == color {
            return;
        }
        self.tools.set_color(color);
        self.events
            .emit(CanvasEvent::ToolChanged(ToolEvent::ColorChanged(color)));
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        let radians = self.tools.set_rotation_degrees(degrees);
        self.events
            .emit(CanvasEvent::ToolChanged(ToolEvent::RotationChanged(radians)));
    }

    /// Pick a palette entry; also switches to sticker mode
    pub fn select_sticker(&mut self, index: usize) {
        let Some(glyph) = self.tools.select_sticker(index).map(str::to_owned) else {
            return;
        };
        self.events
            .emit(CanvasEvent::ToolChanged(ToolEvent::StickerSelected(glyph)));
        self.set_mode(ToolMode::Sticker);
    }

    /// Add a sticker from the custom prompt; `None` means the prompt was cancelled.
    /// Returns false when nothing was added.
    pub fn add_custom_sticker(&mut self, input: Option<&str>) -> bool {
        if !self.tools.add_custom_sticker(input) {
            return false;
        }
        let glyph = self.tools.sticker().to_owned();
        self.events
            .emit(CanvasEvent::ToolChanged(ToolEvent::StickerAdded(glyph)));
        self.set_mode(ToolMode::Sticker);
        true
    }
}
