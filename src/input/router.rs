use egui::PointerButton;

use crate::drawable::{Drawable, Stroke};
use crate::event::{CanvasEvent, EventBus, HistoryEvent};
use crate::history::History;
use crate::renderer::Preview;
use crate::tools::{Tool, ToolMode, ToolState, ToolType};

use super::InputEvent;

/// Routes canvas input to the active tool and commits whatever the tool finishes.
///
/// The in-progress stroke lives inside the marker tool and is invisible to History
/// until pointer-up (or leave, or a mode switch) commits it.
#[derive(Debug)]
pub struct InputController {
    active: ToolType,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(ToolMode::default())
    }
}

impl InputController {
    pub fn new(mode: ToolMode) -> Self {
        Self {
            active: ToolType::for_mode(mode),
        }
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.active
    }

    pub fn live_stroke(&self) -> Option<&Stroke> {
        self.active.in_progress()
    }

    pub fn preview(&self, tools: &ToolState) -> Option<Preview> {
        self.active.preview(tools)
    }

    /// Feed one pointer event to the active tool
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        tools: &ToolState,
        history: &mut History,
        events: &EventBus,
    ) {
        let finished = match event {
            InputEvent::PointerDown { location, button } if *button == PointerButton::Primary => {
                self.active.on_pointer_down(location.position, tools)
            }
            InputEvent::PointerUp { location, button } if *button == PointerButton::Primary => {
                self.active.on_pointer_up(location.position, tools)
            }
            InputEvent::PointerMove { location, .. } | InputEvent::PointerEnter { location } => {
                self.active.on_pointer_move(location.position, tools)
            }
            InputEvent::PointerLeave { .. } => self.active.on_pointer_leave(tools),
            // Secondary and middle buttons do nothing on the canvas.
            InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => return,
        };

        if let Some(stroke) = self.active.in_progress() {
            if matches!(event, InputEvent::PointerMove { .. }) {
                events.emit(CanvasEvent::StrokeExtended {
                    points: stroke.points().len(),
                });
            }
        }

        if let Some(drawable) = finished {
            Self::commit(drawable, history, events);
        }
        events.emit(CanvasEvent::PreviewChanged);
    }

    /// Swap to the tool for `mode`, committing any stroke in progress first
    pub fn switch_mode(&mut self, mode: ToolMode, history: &mut History, events: &EventBus) {
        if self.active.mode() == mode {
            return;
        }
        if let Some(drawable) = self.active.deactivate() {
            log::debug!("Finalizing {} before switching tools", drawable.kind());
            Self::commit(drawable, history, events);
        }
        self.active = ToolType::for_mode(mode);
        log::info!("Active tool: {}", self.active.name());
    }

    fn commit(drawable: Drawable, history: &mut History, events: &EventBus) {
        let kind = drawable.kind();
        history.commit(drawable);
        events.emit(CanvasEvent::HistoryChanged(HistoryEvent::Committed { kind }));
    }
}
