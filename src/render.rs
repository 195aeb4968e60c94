//! Reference renderer for compiled keyboards.
//!
//! Paints key rectangles into an ARGB (0xAARRGGBB) pixel buffer the size of
//! the keyboard. Pixel (0, 0) is the keyboard origin, not the canvas origin.
//! [`render`] records a [`KeyLabel`] for every interactive key; with a font,
//! [`render_with_font`] also rasterizes those labels centred on their keys.

use crate::error::{OskError, OskResult};
use crate::layout::{CompiledKeyboard, Point};
use fontdue::{Font, FontSettings};
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageBuffer, ImageError, Rgba};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const BACKGROUND: u32 = 0xFFF0F0F0;
pub const KEY_FILL: u32 = 0xFFFFFFFF;
pub const KEY_STROKE: u32 = 0xFF000000;
pub const LABEL_COLOR: u32 = 0xFF000000;
pub const DEFAULT_FONT_SIZE: f32 = 36.0;

/// Where a key's label is anchored (centred on `center`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLabel {
    pub center: Point,
    pub text: String,
}

pub struct KeyboardImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
    pub labels: Vec<KeyLabel>,
}

/// Alpha-blends `fg` over an opaque `bg`.
fn blend(bg: u32, fg: u32, alpha: f32) -> u32 {
    let mix = |shift: u32| {
        let b = ((bg >> shift) & 0xFF) as f32;
        let f = ((fg >> shift) & 0xFF) as f32;
        (b * (1.0 - alpha) + f * alpha) as u32
    };
    0xFF000000 | (mix(16) << 16) | (mix(8) << 8) | mix(0)
}

pub fn load_font<P: AsRef<Path>>(path: P) -> OskResult<Font> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let font = Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| OskError::Font(format!("{}: {}", path.display(), e)))?;
    info!("Loaded font {}", path.display());
    Ok(font)
}

impl KeyboardImage {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
            labels: Vec::new(),
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Fills a rectangle, clipped to the image.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let clip = |v: i32, max: usize| (v.max(0) as usize).min(max);
        let x0 = clip(x, self.width);
        let y0 = clip(y, self.height);
        let x1 = clip(x.saturating_add(w), self.width);
        let y1 = clip(y.saturating_add(h), self.height);
        if x1 <= x0 {
            return;
        }

        for py in y0..y1 {
            let row_start = py * self.width;
            self.pixels[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// 1px outline along the inside edge of the rectangle.
    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + h - 1, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + w - 1, y, 1, h, color);
    }

    /// Rasterizes `text` so that its advance box is centred on `center`.
    fn draw_text_centered(&mut self, font: &Font, size: f32, center: Point, text: &str) {
        let glyphs: Vec<_> = text.chars().map(|ch| font.rasterize(ch, size)).collect();
        let advance: f32 = glyphs.iter().map(|(m, _)| m.advance_width).sum();
        let (ascent, descent) = font
            .horizontal_line_metrics(size)
            .map_or((size, 0.0), |lm| (lm.ascent, lm.descent));

        let mut pen_x = center.x as f32 - advance / 2.0;
        let baseline = center.y as f32 + (ascent + descent) / 2.0;

        for (metrics, bitmap) in &glyphs {
            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;
            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let alpha = bitmap.get(gy * metrics.width + gx).copied().unwrap_or(0);
                    if alpha == 0 {
                        continue;
                    }
                    let px = (pen_x + (gx as i32 + metrics.xmin) as f32) as isize;
                    let py = (glyph_top + gy as f32) as isize;
                    if px < 0 || py < 0 {
                        continue;
                    }
                    let (px, py) = (px as usize, py as usize);
                    if px < self.width && py < self.height {
                        let idx = py * self.width + px;
                        self.pixels[idx] =
                            blend(self.pixels[idx], LABEL_COLOR, f32::from(alpha) / 255.0);
                    }
                }
            }
            pen_x += metrics.advance_width;
        }
    }

    /// Draws every recorded label.
    pub fn draw_labels(&mut self, font: &Font, size: f32) {
        let labels = std::mem::take(&mut self.labels);
        for label in &labels {
            self.draw_text_centered(font, size, label.center, &label.text);
        }
        self.labels = labels;
    }

    /// Writes the image as an RGBA PNG, creating parent directories as needed.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> OskResult<()> {
        let path = path.as_ref();
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            let [a, r, g, b] = pixel.to_be_bytes();
            rgba.extend_from_slice(&[r, g, b, a]);
        }

        let img = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            self.width as u32,
            self.height as u32,
            rgba,
        )
        .ok_or_else(|| {
            ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            ))
        })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        img.save(path)?;
        debug!("Wrote {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Paints every interactive key of `kb`. Padding keys leave the background showing.
pub fn render(kb: &CompiledKeyboard) -> KeyboardImage {
    let width = kb.width().max(0) as usize;
    let height = kb.height().max(0) as usize;
    let mut img = KeyboardImage::new(width, height);
    let origin = kb.origin();

    for row in kb.rows() {
        for key in row.keys.iter().filter(|k| k.is_key) {
            let kx = key.origin.x - origin.x;
            let ky = key.origin.y - origin.y;
            img.fill_rect(kx, ky, key.width, row.height, KEY_FILL);
            img.stroke_rect(kx, ky, key.width, row.height, KEY_STROKE);
            img.labels.push(KeyLabel {
                center: Point::new(kx + key.width / 2, ky + row.height / 2),
                text: key.label(),
            });
        }
    }

    img
}

/// [`render`] followed by rasterizing every label in `font` at `size` px.
pub fn render_with_font(kb: &CompiledKeyboard, font: &Font, size: f32) -> KeyboardImage {
    let mut img = render(kb);
    img.draw_labels(font, size);
    img
}
