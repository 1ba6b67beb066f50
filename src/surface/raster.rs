use ab_glyph::{Font, FontArc, OutlinedGlyph, PxScale, ScaleFont, point};
use egui::{Color32, Pos2};
use tiny_skia::{
    FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use super::Surface;
use crate::error::{ExportError, ExportResult};

/// Offscreen raster surface used for export.
///
/// Surface-local coordinates, thicknesses and glyph sizes are multiplied by `scale`,
/// so a 256px canvas rendered at scale 4 fills a 1024px pixmap.
pub struct RasterSurface {
    pixmap: Pixmap,
    scale: f32,
    fonts: Vec<FontArc>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> ExportResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(ExportError::SurfaceAllocation { width, height })?;

        Ok(Self {
            pixmap,
            scale,
            fonts: default_fonts(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Consume the surface, returning straight-alpha RGBA rows
    pub fn into_rgba(self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        rgba
    }

    fn paint_for(color: Color32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    fn font_for(&self, ch: char) -> Option<&FontArc> {
        self.fonts.iter().find(|font| font.glyph_id(ch).0 != 0)
    }

    /// Outline every char of `text` at `px`, laid out on one line centered on the origin
    fn outline_centered(&self, text: &str, px: f32) -> Vec<OutlinedGlyph> {
        let mut caret = 0.0;
        let mut ascent: f32 = 0.0;
        let mut descent: f32 = 0.0;
        let mut placed = Vec::new();

        for ch in text.chars() {
            let Some(font) = self.font_for(ch) else {
                log::debug!("No export font covers {ch:?}, skipping it");
                continue;
            };
            let scaled = font.as_scaled(PxScale::from(px));
            let id = font.glyph_id(ch);
            ascent = ascent.max(scaled.ascent());
            descent = descent.min(scaled.descent());
            placed.push((font, id.with_scale_and_position(px, point(caret, 0.0))));
            caret += scaled.h_advance(id);
        }

        let dx = -caret / 2.0;
        let dy = (ascent + descent) / 2.0;

        placed
            .into_iter()
            .filter_map(|(font, mut glyph)| {
                glyph.position.x += dx;
                glyph.position.y += dy;
                font.outline_glyph(glyph)
            })
            .collect()
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut builder = PathBuilder::new();
        builder.move_to(first.x * self.scale, first.y * self.scale);
        for p in rest {
            builder.line_to(p.x * self.scale, p.y * self.scale);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width: thickness * self.scale,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint_for(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn circle(&mut self, center: Pos2, radius: f32, stroke_width: f32, color: Color32) {
        let Some(path) = PathBuilder::from_circle(
            center.x * self.scale,
            center.y * self.scale,
            radius * self.scale,
        ) else {
            return;
        };

        let stroke = Stroke {
            width: stroke_width * self.scale,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint_for(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, angle: f32, color: Color32) {
        let outlines = self.outline_centered(text, size * self.scale);
        if outlines.is_empty() {
            return;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for outlined in &outlines {
            let bounds = outlined.px_bounds();
            min_x = min_x.min(bounds.min.x);
            min_y = min_y.min(bounds.min.y);
            max_x = max_x.max(bounds.max.x);
            max_y = max_y.max(bounds.max.y);
        }
        let (min_x, min_y) = (min_x.floor(), min_y.floor());
        let width = (max_x.ceil() - min_x).max(0.0) as u32;
        let height = (max_y.ceil() - min_y).max(0.0) as u32;

        // Rasterize coverage unrotated, then composite it with the rotation applied.
        let Some(mut mask) = Pixmap::new(width, height) else {
            return;
        };

        let mut coverage = vec![0.0f32; (width * height) as usize];
        for outlined in &outlines {
            let bounds = outlined.px_bounds();
            let ox = (bounds.min.x - min_x) as u32;
            let oy = (bounds.min.y - min_y) as u32;
            outlined.draw(|x, y, c| {
                let (px, py) = (ox + x, oy + y);
                if px < width && py < height {
                    let cell = &mut coverage[(py * width + px) as usize];
                    *cell = cell.max(c.clamp(0.0, 1.0));
                }
            });
        }

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        for (texel, c) in mask.data_mut().chunks_exact_mut(4).zip(coverage) {
            let alpha = c * f32::from(a) / 255.0;
            texel[0] = (f32::from(r) * alpha).round() as u8;
            texel[1] = (f32::from(g) * alpha).round() as u8;
            texel[2] = (f32::from(b) * alpha).round() as u8;
            texel[3] = (255.0 * alpha).round() as u8;
        }

        let transform = Transform::from_rotate(angle.to_degrees())
            .post_translate(center.x * self.scale, center.y * self.scale);
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            min_x as i32,
            min_y as i32,
            mask.as_ref(),
            &paint,
            transform,
            None,
        );
    }
}

/// The proportional fonts egui ships with, in egui's fallback order
fn default_fonts() -> Vec<FontArc> {
    let definitions = egui::FontDefinitions::default();
    let Some(names) = definitions.families.get(&egui::FontFamily::Proportional) else {
        return Vec::new();
    };

    names
        .iter()
        .filter_map(|name| definitions.font_data.get(name).map(|data| (name, data)))
        .filter_map(|(name, data)| match FontArc::try_from_vec(data.font.to_vec()) {
            Ok(font) => Some(font),
            Err(err) => {
                log::warn!("Skipping export font {name}: {err}");
                None
            }
        })
        .collect()
}
