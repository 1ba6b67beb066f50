#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod drawable;
pub mod error;
pub mod event;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::StickerPadApp;
pub use config::AppConfig;
pub use drawable::{Drawable, Render, Sticker, Stroke};
pub use error::{ConfigError, ExportError};
pub use history::History;
pub use input::{InputEvent, InputLocation};
pub use renderer::{Preview, Renderer};
pub use state::CanvasState;
pub use tools::{Tool, ToolMode, ToolState};
