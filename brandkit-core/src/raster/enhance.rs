//! Brightness and contrast adjustments on colour channels. Alpha is kept.

use image::{Rgba, RgbaImage};

fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Scale every colour channel by `factor`.
pub fn brightness(img: &RgbaImage, factor: f32) -> RgbaImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let Rgba([r, g, b, a]) = *px;
        *px = Rgba([clamp_u8(r as f32 * factor), clamp_u8(g as f32 * factor), clamp_u8(b as f32 * factor), a]);
    }
    out
}

/// Mean ITU-R 601 luma over all pixels, rounded.
pub fn mean_luma(img: &RgbaImage) -> f32 {
    let n = (img.width() as u64 * img.height() as u64).max(1);
    let sum: u64 = img
        .pixels()
        .map(|Rgba([r, g, b, _])| (*r as u64 * 299 + *g as u64 * 587 + *b as u64 * 114) / 1000)
        .sum();
    (sum as f32 / n as f32).round()
}

/// Push colours away from (factor > 1) or toward (factor < 1) the mean grey.
pub fn contrast(img: &RgbaImage, factor: f32) -> RgbaImage {
    let mean = mean_luma(img);
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let Rgba([r, g, b, a]) = *px;
        let adjust = |c: u8| clamp_u8(mean + (c as f32 - mean) * factor);
        *px = Rgba([adjust(r), adjust(g), adjust(b), a]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_scales_and_keeps_alpha() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 10, 77]));
        assert_eq!(brightness(&img, 0.7).get_pixel(0, 0), &Rgba([140, 70, 7, 77]));
        assert_eq!(brightness(&img, 2.0).get_pixel(0, 0), &Rgba([255, 200, 20, 77]));
    }

    #[test]
    fn contrast_spreads_around_mean() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([100, 100, 100, 255]));
        img.put_pixel(1, 0, Rgba([200, 200, 200, 255]));
        assert_eq!(mean_luma(&img), 150.0);
        let out = contrast(&img, 1.2);
        assert_eq!(out.get_pixel(0, 0), &Rgba([90, 90, 90, 255]));
        assert_eq!(out.get_pixel(1, 0), &Rgba([210, 210, 210, 255]));
    }

    #[test]
    fn unit_factors_are_identity() {
        let img = RgbaImage::from_fn(3, 3, |x, y| Rgba([(x * 40) as u8, (y * 50) as u8, 7, 255]));
        assert_eq!(brightness(&img, 1.0), img);
        assert_eq!(contrast(&img, 1.0), img);
    }
}
