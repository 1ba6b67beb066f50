use std::sync::Arc;

use egui::{Color32, PointerButton, Pos2};
use parking_lot::Mutex;
use sticker_pad::event::{CanvasEvent, EventHandler, HistoryEvent, ToolEvent};
use sticker_pad::tools::ThicknessPreset;
use sticker_pad::{CanvasState, InputEvent, InputLocation, ToolMode};

/// Collects every event the canvas emits
struct Recorder(Arc<Mutex<Vec<CanvasEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &CanvasEvent) {
        self.0.lock().push(event.clone());
    }
}

fn recorded_state() -> (CanvasState, Arc<Mutex<Vec<CanvasEvent>>>) {
    let state = CanvasState::default();
    let log = Arc::new(Mutex::new(Vec::new()));
    state.events().subscribe(Box::new(Recorder(Arc::clone(&log))));
    (state, log)
}

fn loc(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: Pos2::new(x, y),
    }
}

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        location: loc(x, y),
        button: PointerButton::Primary,
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        location: loc(x, y),
        button: PointerButton::Primary,
    }
}

fn drag(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        location: loc(x, y),
        held_buttons: vec![PointerButton::Primary],
    }
}

fn history_events(log: &Mutex<Vec<CanvasEvent>>) -> Vec<HistoryEvent> {
    log.lock()
        .iter()
        .filter_map(|event| match event {
            CanvasEvent::HistoryChanged(change) => Some(change.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_drag_commits_one_stroke_on_release() {
    let (mut state, log) = recorded_state();

    state.handle_input(&down(10.0, 10.0));
    state.handle_input(&drag(20.0, 15.0));
    state.handle_input(&drag(30.0, 20.0));
    assert!(state.history().is_empty());
    assert_eq!(state.live_stroke().map(|s| s.points().len()), Some(3));

    state.handle_input(&up(30.0, 20.0));

    assert!(state.live_stroke().is_none());
    let stroke = state.history().list()[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[Pos2::new(10.0, 10.0), Pos2::new(20.0, 15.0), Pos2::new(30.0, 20.0)]
    );
    assert_eq!(
        history_events(&log),
        vec![HistoryEvent::Committed { kind: "stroke" }]
    );

    let extended = log
        .lock()
        .iter()
        .filter(|e| matches!(e, CanvasEvent::StrokeExtended { .. }))
        .count();
    assert_eq!(extended, 2);
}

#[test]
fn test_stroke_uses_settings_at_press_time() {
    let (mut state, _log) = recorded_state();
    state.select_thickness(ThicknessPreset::Thick);
    state.set_color(Color32::RED);

    state.handle_input(&down(0.0, 0.0));
    // Changes mid-stroke do not restyle the stroke being drawn.
    state.set_color(Color32::BLUE);
    state.handle_input(&drag(5.0, 5.0));
    state.handle_input(&up(5.0, 5.0));

    let stroke = state.history().list()[0].as_stroke().unwrap();
    assert_eq!(stroke.thickness(), 6.0);
    assert_eq!(stroke.color(), Color32::RED);
}

#[test]
fn test_leaving_canvas_ends_stroke() {
    let (mut state, _log) = recorded_state();

    state.handle_input(&down(1.0, 1.0));
    state.handle_input(&drag(2.0, 2.0));
    state.handle_input(&InputEvent::PointerLeave {
        last_known_location: loc(2.0, 2.0),
    });

    assert_eq!(state.history().len(), 1);
    assert!(state.live_stroke().is_none());

    // Moving back in with the button still held does not resume drawing.
    state.handle_input(&drag(3.0, 3.0));
    assert!(state.live_stroke().is_none());
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_secondary_button_is_ignored() {
    let (mut state, _log) = recorded_state();

    state.handle_input(&InputEvent::PointerDown {
        location: loc(5.0, 5.0),
        button: PointerButton::Secondary,
    });
    state.handle_input(&InputEvent::PointerUp {
        location: loc(5.0, 5.0),
        button: PointerButton::Secondary,
    });

    assert!(state.history().is_empty());
    assert!(state.live_stroke().is_none());
}

#[test]
fn test_sticker_mode_places_on_press() {
    let (mut state, log) = recorded_state();
    state.select_sticker(3);
    state.set_rotation_degrees(45.0);
    assert_eq!(state.tools().mode(), ToolMode::Sticker);

    state.handle_input(&down(100.0, 120.0));
    assert_eq!(state.history().len(), 1);
    state.handle_input(&up(100.0, 120.0));
    assert_eq!(state.history().len(), 1);

    let sticker = state.history().list()[0].as_sticker().unwrap();
    assert_eq!(sticker.glyph(), "🐱");
    assert_eq!(sticker.position(), Pos2::new(100.0, 120.0));
    assert!((sticker.rotation() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);

    let tool_events: Vec<ToolEvent> = log
        .lock()
        .iter()
        .filter_map(|event| match event {
            CanvasEvent::ToolChanged(change) => Some(change.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(tool_events[0], ToolEvent::StickerSelected("🐱".to_owned()));
    assert_eq!(tool_events[1], ToolEvent::ModeChanged(ToolMode::Sticker));
}

#[test]
fn test_mode_switch_mid_stroke_commits_stroke_first() {
    let (mut state, log) = recorded_state();

    state.handle_input(&down(0.0, 0.0));
    state.handle_input(&drag(10.0, 10.0));
    state.set_mode(ToolMode::Sticker);

    assert!(state.live_stroke().is_none());
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.history().list()[0].kind(), "stroke");
    assert_eq!(
        history_events(&log),
        vec![HistoryEvent::Committed { kind: "stroke" }]
    );

    // The release lands on the sticker tool and places nothing.
    state.handle_input(&up(10.0, 10.0));
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_undo_during_stroke_leaves_live_stroke_alone() {
    let (mut state, _log) = recorded_state();

    state.handle_input(&down(0.0, 0.0));
    state.handle_input(&up(0.0, 0.0));
    state.handle_input(&down(5.0, 5.0));
    state.handle_input(&drag(6.0, 6.0));

    assert!(state.undo());
    assert!(state.history().is_empty());
    assert_eq!(state.live_stroke().map(|s| s.points().len()), Some(2));

    state.handle_input(&up(6.0, 6.0));
    assert_eq!(state.history().len(), 1);
    // The fresh commit dropped the undone click.
    assert!(!state.history().can_redo());
}

#[test]
fn test_undo_redo_clear_announce_changes() {
    let (mut state, log) = recorded_state();

    assert!(!state.undo());
    assert!(!state.redo());
    assert!(history_events(&log).is_empty());

    state.handle_input(&down(0.0, 0.0));
    state.handle_input(&up(0.0, 0.0));
    assert!(state.undo());
    assert!(state.redo());
    state.clear();

    assert_eq!(
        history_events(&log),
        vec![
            HistoryEvent::Committed { kind: "stroke" },
            HistoryEvent::Undone { kind: "stroke" },
            HistoryEvent::Redone { kind: "stroke" },
            HistoryEvent::Cleared,
        ]
    );
}

#[test]
fn test_custom_sticker_cancel_is_silent() {
    let (mut state, log) = recorded_state();
    let before = state.tools().stickers().len();

    assert!(!state.add_custom_sticker(None));
    assert!(!state.add_custom_sticker(Some("  ")));

    assert_eq!(state.tools().stickers().len(), before);
    assert_eq!(state.tools().mode(), ToolMode::Marker);
    assert!(log.lock().is_empty());
}

#[test]
fn test_custom_sticker_is_placed() {
    let (mut state, _log) = recorded_state();

    assert!(state.add_custom_sticker(Some("🦀")));
    state.handle_input(&down(8.0, 8.0));

    let sticker = state.history().list()[0].as_sticker().unwrap();
    assert_eq!(sticker.glyph(), "🦀");
}

#[test]
fn test_unchanged_color_emits_nothing() {
    let (mut state, log) = recorded_state();
    state.set_color(Color32::BLACK);
    assert!(log.lock().is_empty());

    state.set_color(Color32::GREEN);
    assert_eq!(
        *log.lock(),
        vec![CanvasEvent::ToolChanged(ToolEvent::ColorChanged(Color32::GREEN))]
    );
}
