use egui::{Color32, Pos2};

use crate::config::AppConfig;
use crate::drawable::{Drawable, Stroke};
use crate::renderer::Preview;

mod marker_tool;
mod sticker_tool;

pub use marker_tool::MarkerTool;
pub use sticker_tool::StickerTool;

/// What a press on the canvas does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Marker,
    Sticker,
}

/// The two marker thickness buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThicknessPreset {
    Thin,
    Thick,
}

/// Current tool settings, read by the tools and by preview rendering
#[derive(Debug, Clone)]
pub struct ToolState {
    mode: ToolMode,
    thickness: f32,
    color: Color32,
    /// Radians
    rotation: f32,
    sticker: String,
    stickers: Vec<String>,
    thin_thickness: f32,
    thick_thickness: f32,
    sticker_size: f32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl ToolState {
    pub fn from_config(config: &AppConfig) -> Self {
        let color = config.default_color().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to black");
            Color32::BLACK
        });

        Self {
            mode: ToolMode::Marker,
            thickness: config.thin_thickness,
            color,
            rotation: 0.0,
            sticker: config.stickers.first().cloned().unwrap_or_default(),
            stickers: config.stickers.clone(),
            thin_thickness: config.thin_thickness,
            thick_thickness: config.thick_thickness,
            sticker_size: config.sticker_size,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Sticker rotation in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.to_degrees()
    }

    /// Glyph the next placed sticker will use
    pub fn sticker(&self) -> &str {
        &self.sticker
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    /// Which preset the current thickness matches, if any
    pub fn thickness_preset(&self) -> Option<ThicknessPreset> {
        if self.thickness == self.thin_thickness {
            Some(ThicknessPreset::Thin)
        } else if self.thickness == self.thick_thickness {
            Some(ThicknessPreset::Thick)
        } else {
            None
        }
    }

    pub(crate) fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
    }

    pub(crate) fn select_thickness(&mut self, preset: ThicknessPreset) -> f32 {
        self.thickness = match preset {
            ThicknessPreset::Thin => self.thin_thickness,
            ThicknessPreset::Thick => self.thick_thickness,
        };
        self.thickness
    }

    pub(crate) fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Clamp to 0..=360 degrees and store as radians. Returns the stored radians.
    pub(crate) fn set_rotation_degrees(&mut self, degrees: f32) -> f32 {
        let degrees = if degrees.is_nan() {
            0.0
        } else {
            degrees.clamp(0.0, 360.0)
        };
        self.rotation = degrees.to_radians();
        self.rotation
    }

    /// Make the palette entry at `index` the current sticker
    pub(crate) fn select_sticker(&mut self, index: usize) -> Option<&str> {
        let glyph = self.stickers.get(index)?;
        self.sticker.clone_from(glyph);
        Some(&self.sticker)
    }

    /// Append a user-entered sticker to the palette and select it.
    ///
    /// `None` is a cancelled prompt. Cancelled or blank input leaves the palette as
    /// it was and returns `false`.
    pub(crate) fn add_custom_sticker(&mut self, input: Option<&str>) -> bool {
        let Some(glyph) = input.map(str::trim).filter(|g| !g.is_empty()) else {
            return false;
        };
        self.stickers.push(glyph.to_owned());
        self.sticker = glyph.to_owned();
        true
    }
}

/// Tool trait defines the interface for the canvas tools.
///
/// Positions are surface-local. A tool returns a finished drawable when a gesture
/// completes; the caller commits it.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas
    fn on_pointer_down(&mut self, pos: Pos2, tools: &ToolState) -> Option<Drawable>;

    /// Handle pointer movement over the canvas, pressed or not
    fn on_pointer_move(&mut self, pos: Pos2, tools: &ToolState) -> Option<Drawable>;

    /// Handle pointer release on the canvas
    fn on_pointer_up(&mut self, pos: Pos2, tools: &ToolState) -> Option<Drawable>;

    /// The pointer left the canvas; acts as a release
    fn on_pointer_leave(&mut self, tools: &ToolState) -> Option<Drawable>;

    /// Called before switching away from this tool.
    /// Finalizes any gesture in progress and hides the preview.
    fn deactivate(&mut self) -> Option<Drawable>;

    /// The stroke currently being drawn, not yet committed
    fn in_progress(&self) -> Option<&Stroke> {
        None
    }

    /// Transient hint to paint on top of the canvas
    fn preview(&self, tools: &ToolState) -> Option<Preview>;
}

/// Enum representing all available tool types
#[derive(Debug)]
pub enum ToolType {
    Marker(MarkerTool),
    Sticker(StickerTool),
}

impl ToolType {
    /// A fresh tool for `mode`
    pub fn for_mode(mode: ToolMode) -> Self {
        match mode {
            ToolMode::Marker => Self::Marker(MarkerTool::new()),
            ToolMode::Sticker => Self::Sticker(StickerTool::new()),
        }
    }

    pub fn mode(&self) -> ToolMode {
        match self {
            Self::Marker(_) => ToolMode::Marker,
            Self::Sticker(_) => ToolMode::Sticker,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Marker(tool) => tool.name(),
            Self::Sticker(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, tools: &ToolState) -> Option<Drawable> {
        match self {
            Self::Marker(tool) => tool.on_pointer_down(pos, tools),
            Self::Sticker(tool) => tool.on_pointer_down(pos, tools),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, tools: &ToolState) -> Option<Drawable> {
        match self {
            Self::Marker(tool) => tool.on_pointer_move(pos, tools),
            Self::Sticker(tool) => tool.on_pointer_move(pos, tools),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, tools: &ToolState) -> Option<Drawable> {
        match self {
            Self::Marker(tool) => tool.on_pointer_up(pos, tools),
            Self::Sticker(tool) => tool.on_pointer_up(pos, tools),
        }
    }

    fn on_pointer_leave(&mut self, tools: &ToolState) -> Option<Drawable> {
        match self {
            Self::Marker(tool) => tool.on_pointer_leave(tools),
            Self::Sticker(tool) => tool.on_pointer_leave(tools),
        }
    }

    fn deactivate(&mut self) -> Option<Drawable> {
        match self {
            Self::Marker(tool) => tool.deactivate(),
            Self::Sticker(tool) => tool.deactivate(),
        }
    }

    fn in_progress(&self) -> Option<&Stroke> {
        match self {
            Self::Marker(tool) => tool.in_progress(),
            Self::Sticker(tool) => tool.in_progress(),
        }
    }

    fn preview(&self, tools: &ToolState) -> Option<Preview> {
        match self {
            Self::Marker(tool) => tool.preview(tools),
            Self::Sticker(tool) => tool.preview(tools),
        }
    }
}
