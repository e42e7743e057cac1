//! Letter-spaced single-line text on RGBA canvases.

use std::path::PathBuf;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use super::bitmap_font::{self, BitmapGlyph};

/// Letter spacing as a fraction of the font size.
pub const LETTER_SPACING_EM: f32 = 0.08;

pub enum Typeface {
    Vector { font: FontVec, source: PathBuf },
    Bitmap,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Typeface::Vector { source, .. } => write!(f, "Vector({})", source.display()),
            Typeface::Bitmap => f.write_str("Bitmap"),
        }
    }
}

impl Typeface {
    pub fn describe(&self) -> String {
        match self {
            Typeface::Vector { source, .. } => source.display().to_string(),
            Typeface::Bitmap => "built-in bitmap font".to_string(),
        }
    }

    /// Ink width and height of `c` at `size` pixels.
    pub fn char_box(&self, c: char, size: f32) -> (u32, u32) {
        match self {
            Typeface::Vector { font, .. } => {
                let scaled = font.as_scaled(PxScale::from(size));
                let glyph = scaled.scaled_glyph(c);
                let id = glyph.id;
                match font.outline_glyph(glyph) {
                    Some(outlined) => {
                        let b = outlined.px_bounds();
                        (b.width() as u32, b.height() as u32)
                    }
                    None => (scaled.h_advance(id).round() as u32, 0),
                }
            }
            Typeface::Bitmap => {
                let (w, h) = BitmapGlyph::lookup(c).ink_size();
                let px = bitmap_font::cell_px(size);
                (w * px, h * px)
            }
        }
    }

    /// Draw `c` with its ink box's top-left corner at (x, y).
    pub fn draw_char(&self, canvas: &mut RgbaImage, c: char, size: f32, x: i64, y: i64, color: [u8; 3]) {
        match self {
            Typeface::Vector { font, .. } => {
                let glyph = font.as_scaled(PxScale::from(size)).scaled_glyph(c);
                if let Some(outlined) = font.outline_glyph(glyph) {
                    outlined.draw(|gx, gy, coverage| {
                        blend(canvas, x + gx as i64, y + gy as i64, color, coverage);
                    });
                }
            }
            Typeface::Bitmap => {
                let px = bitmap_font::cell_px(size) as i64;
                for (cx, cy) in BitmapGlyph::lookup(c).cells() {
                    for dy in 0..px {
                        for dx in 0..px {
                            blend(canvas, x + cx as i64 * px + dx, y + cy as i64 * px + dy, color, 1.0);
                        }
                    }
                }
            }
        }
    }
}

fn blend(canvas: &mut RgbaImage, x: i64, y: i64, color: [u8; 3], coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }
    let a = coverage.clamp(0.0, 1.0);
    let px = canvas.get_pixel_mut(x as u32, y as u32);
    let Rgba([r, g, b, alpha]) = *px;
    let mix = |dst: u8, src: u8| (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8;
    let out_alpha = (a * 255.0 + alpha as f32 * (1.0 - a)).round() as u8;
    *px = Rgba([mix(r, color[0]), mix(g, color[1]), mix(b, color[2]), out_alpha]);
}

/// Measured line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub size: f32,
    pub spacing: f32,
    pub widths: Vec<u32>,
    pub heights: Vec<u32>,
    pub total_width: f32,
    pub max_height: u32,
}

impl TextLayout {
    pub fn measure(typeface: &Typeface, text: &str, size: f32) -> Self {
        let (widths, heights): (Vec<u32>, Vec<u32>) = text.chars().map(|c| typeface.char_box(c, size)).unzip();
        let spacing = size * LETTER_SPACING_EM;
        let gaps = widths.len().saturating_sub(1) as f32;
        let total_width = widths.iter().sum::<u32>() as f32 + gaps * spacing;
        let max_height = heights.iter().copied().max().unwrap_or(size as u32);
        Self { size, spacing, widths, heights, total_width, max_height }
    }

    /// Draw each glyph left to right, vertically centred in the row at `top`.
    pub fn draw(&self, canvas: &mut RgbaImage, typeface: &Typeface, text: &str, left: i64, top: i64, color: [u8; 3]) {
        let mut cursor = left as f32;
        for ((c, w), h) in text.chars().zip(&self.widths).zip(&self.heights) {
            let y = top + (self.max_height.saturating_sub(*h) / 2) as i64;
            typeface.draw_char(canvas, c, self.size, cursor.round() as i64, y, color);
            cursor += *w as f32 + self.spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_layout_adds_letter_spacing() {
        let layout = TextLayout::measure(&Typeface::Bitmap, "UI", 80.0);
        // cells are 10px: U is 5 wide, I is 3 wide
        assert_eq!(layout.widths, vec![50, 30]);
        assert_eq!(layout.max_height, 70);
        assert!((layout.total_width - (80.0 + 6.4)).abs() < 1e-3);
    }

    #[test]
    fn empty_text_has_zero_width() {
        let layout = TextLayout::measure(&Typeface::Bitmap, "", 16.0);
        assert_eq!(layout.total_width, 0.0);
        assert_eq!(layout.max_height, 16);
    }

    #[test]
    fn drawing_inks_the_canvas() {
        let mut canvas = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 0, 255]));
        let layout = TextLayout::measure(&Typeface::Bitmap, "-", 16.0);
        layout.draw(&mut canvas, &Typeface::Bitmap, "-", 2, 2, [145, 145, 145]);
        let inked = canvas.pixels().filter(|p| p.0[0] == 145).count();
        // one row of five 2x2 cells
        assert_eq!(inked, 5 * 4);
    }

    #[test]
    fn drawing_clips_at_edges() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        Typeface::Bitmap.draw_char(&mut canvas, 'W', 40.0, -3, -3, [255, 255, 255]);
    }
}
