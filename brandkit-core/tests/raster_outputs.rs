use brandkit_core::raster::banner::{HeaderBanner, WideBanner};
use brandkit_core::raster::{canvas, favicon, Typeface};
use image::{DynamicImage, Rgba, RgbaImage};

fn square_transparent_logo(size: u32) -> DynamicImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let c = size as i64 / 2;
    for (x, y, px) in img.enumerate_pixels_mut() {
        let (dx, dy) = (x as i64 - c, y as i64 - c);
        if dx * dx + dy * dy < c * c / 2 {
            *px = Rgba([210, 210, 210, 255]);
        }
    }
    DynamicImage::ImageRgba8(img)
}

#[test]
fn wide_banner_file_has_exact_dimensions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("banner-4x1.png");
    let banner = WideBanner { width: 1200, scale: 2, ..WideBanner::default() };
    let img = banner.render(&square_transparent_logo(128), "ULTRATHINK", &Typeface::Bitmap).expect("render");
    canvas::write_png(&out, &DynamicImage::ImageRgb8(img)).expect("write");

    let back = image::open(&out).expect("read");
    assert_eq!((back.width(), back.height()), (2400, 600));
    assert_eq!(back.to_rgb8().get_pixel(0, 0).0, [255, 255, 255]);
}

#[test]
fn header_banner_centres_logo_vertically() {
    let banner = HeaderBanner { logo_size: 48, scale: 1, ..HeaderBanner::default() };
    let img = banner.render(&square_transparent_logo(96), "UT", &Typeface::Bitmap).expect("render");
    // logo occupies rows 16..64 starting at x = 80
    assert_eq!(img.height(), 48 + 32);
    assert_eq!(img.get_pixel(80 + 24, 16 + 24).0, [210, 210, 210]);
    assert_eq!(img.get_pixel(79, 40).0, [0, 0, 0]);
}

#[test]
fn favicon_pipeline_from_logo_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let logo = dir.path().join("logo.png");
    square_transparent_logo(64).save(&logo).expect("save logo");

    let got = favicon::generate(&logo, None, &favicon::FaviconOptions { size: 48 }).expect("favicon");
    assert!(got.provider.starts_with("logo"));
    assert!(got.skipped.is_empty());
    assert_eq!(got.value.dimensions(), (48, 48));
    assert_eq!(got.value.get_pixel(0, 0).0, [0, 0, 0]);
}
