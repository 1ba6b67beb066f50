use egui::{Context, PointerButton, Pos2, Rect};

mod router;
pub use router::InputController;

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Surface-local position: origin at the canvas' top-left corner
    pub position: Pos2,
}

/// Pointer events on the drawing canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Pointer entered the canvas
    PointerEnter { location: InputLocation },
    /// Pointer left the canvas (or the window)
    PointerLeave { last_known_location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> InputLocation {
        match self {
            InputEvent::PointerDown { location, .. }
            | InputEvent::PointerUp { location, .. }
            | InputEvent::PointerMove { location, .. }
            | InputEvent::PointerEnter { location } => *location,
            InputEvent::PointerLeave {
                last_known_location,
            } => *last_known_location,
        }
    }
}

/// The pointer facts of one frame, as read from egui
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Screen position, `None` when the pointer is outside the window
    pub hover_pos: Option<Pos2>,
    pub pressed: Vec<PointerButton>,
    pub released: Vec<PointerButton>,
    pub held: Vec<PointerButton>,
}

impl PointerSnapshot {
    /// Read this frame's pointer state
    pub fn capture(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            pressed: BUTTONS
                .into_iter()
                .filter(|b| input.pointer.button_pressed(*b))
                .collect(),
            released: BUTTONS
                .into_iter()
                .filter(|b| input.pointer.button_released(*b))
                .collect(),
            held: BUTTONS
                .into_iter()
                .filter(|b| input.pointer.button_down(*b))
                .collect(),
        })
    }
}

/// Converts raw egui pointer input into canvas [`InputEvent`]s.
///
/// Only positions inside the canvas rect produce down/move/up events. Leaving the
/// rect, or the window, produces a single `PointerLeave`.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.process_pointer(&PointerSnapshot::capture(ctx))
    }

    pub fn process_pointer(&mut self, snapshot: &PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let Some(pos) = snapshot
            .hover_pos
            .filter(|pos| self.canvas_rect.contains(*pos))
        else {
            if let Some(last) = self.last_pointer_pos.take() {
                events.push(InputEvent::PointerLeave {
                    last_known_location: self.make_location(last),
                });
            }
            return events;
        };
        let location = self.make_location(pos);

        if self.last_pointer_pos.is_none() {
            events.push(InputEvent::PointerEnter { location });
        }

        // Move before press, so a press lands where the pointer already is and a
        // click does not record its start point twice.
        if Some(pos) != self.last_pointer_pos {
            events.push(InputEvent::PointerMove {
                location,
                held_buttons: snapshot.held.clone(),
            });
        }
        self.last_pointer_pos = Some(pos);

        for &button in &snapshot.pressed {
            events.push(InputEvent::PointerDown { location, button });
        }
        for &button in &snapshot.released {
            events.push(InputEvent::PointerUp { location, button });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(256.0, 256.0)))
    }

    fn at(x: f32, y: f32) -> PointerSnapshot {
        PointerSnapshot {
            hover_pos: Some(pos2(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_positions_are_surface_local() {
        let mut input = handler();
        let events = input.process_pointer(&at(110.0, 70.0));

        assert_eq!(
            events,
            vec![
                InputEvent::PointerEnter {
                    location: InputLocation { position: pos2(10.0, 20.0) }
                },
                InputEvent::PointerMove {
                    location: InputLocation { position: pos2(10.0, 20.0) },
                    held_buttons: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_press_follows_move_and_still_pointer_is_quiet() {
        let mut input = handler();
        input.process_pointer(&at(110.0, 70.0));

        let press = PointerSnapshot {
            pressed: vec![PointerButton::Primary],
            held: vec![PointerButton::Primary],
            ..at(110.0, 70.0)
        };
        let events = input.process_pointer(&press);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            InputEvent::PointerDown { button: PointerButton::Primary, .. }
        ));

        assert!(input.process_pointer(&at(110.0, 70.0)).is_empty());
    }

    #[test]
    fn test_leaving_canvas_emits_single_leave() {
        let mut input = handler();
        input.process_pointer(&at(110.0, 70.0));

        let events = input.process_pointer(&at(10.0, 10.0));
        assert_eq!(
            events,
            vec![InputEvent::PointerLeave {
                last_known_location: InputLocation { position: pos2(10.0, 20.0) }
            }]
        );

        assert!(input.process_pointer(&PointerSnapshot::default()).is_empty());
    }

    #[test]
    fn test_presses_outside_canvas_are_ignored() {
        let mut input = handler();
        let outside = PointerSnapshot {
            pressed: vec![PointerButton::Primary],
            ..at(0.0, 0.0)
        };
        assert!(input.process_pointer(&outside).is_empty());
    }
}
