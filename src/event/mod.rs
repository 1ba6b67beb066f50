mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{CanvasEvent, HistoryEvent, ToolEvent};
pub use handlers::{EventLogger, RepaintOnChange};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &CanvasEvent);
}
