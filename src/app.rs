use egui::{Key, KeyboardShortcut, Modifiers, Rect};

use crate::config::AppConfig;
use crate::event::{EventLogger, RepaintOnChange};
use crate::export;
use crate::input::InputHandler;
use crate::panels::{central_panel, sticker_prompt, tools_panel};
use crate::renderer::Renderer;
use crate::state::CanvasState;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct StickerPadApp {
    state: CanvasState,
    renderer: Renderer,
    input: InputHandler,
    /// Text of the open custom-sticker prompt; `None` while it is closed
    sticker_prompt: Option<String>,
}

impl StickerPadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let app = Self::with_config(config);
        app.state
            .events()
            .subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));
        app
    }

    /// An app without a window attached, for tests and headless use
    pub fn with_config(config: AppConfig) -> Self {
        let state = CanvasState::new(config);
        state.events().subscribe(Box::new(EventLogger));
        Self {
            state,
            renderer: Renderer::new(),
            input: InputHandler::new(Rect::NOTHING),
            sticker_prompt: None,
        }
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Turn this frame's pointer input over `canvas_rect` into canvas events
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.state.handle_input(&event);
        }
    }

    pub fn export(&self) {
        export::export_and_deliver(self.state.history(), self.state.config());
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt.get_or_insert_with(String::new);
    }

    pub fn sticker_prompt_mut(&mut self) -> Option<&mut String> {
        self.sticker_prompt.as_mut()
    }

    pub fn is_sticker_prompt_open(&self) -> bool {
        self.sticker_prompt.is_some()
    }

    /// Close the prompt; `None` is a cancel
    pub fn close_sticker_prompt(&mut self, input: Option<&str>) {
        self.sticker_prompt = None;
        if !self.state.add_custom_sticker(input) {
            log::debug!("Custom sticker prompt closed without adding anything");
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Most specific first: Cmd+Shift+Z would also match plain Cmd+Z.
        if ctx.input_mut(|i| i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT)) {
            self.state.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO)) {
            self.state.undo();
        }
    }
}

impl eframe::App for StickerPadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.is_sticker_prompt_open() {
            self.handle_shortcuts(ctx);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
        sticker_prompt(self, ctx);
    }
}
