//! Generated PNGs have the exact pixel sizes the site expects

use quanta_tools::assets::{header, logo};
use quanta_tools::rendering::raster;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Decoded RGBA pixels of an in-memory PNG
fn rgba(png_data: &[u8]) -> (usize, Vec<u8>) {
    let decoder = png::Decoder::new(png_data);
    let mut reader = decoder.read_info().expect("decode");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("frame");
    assert_eq!(info.color_type, png::ColorType::Rgba);
    (info.width as usize, buf)
}

/// Count opaque pixels in `[x0, x1) x [y0, y1)` matching `pred(r, g, b)`
fn count_in_box(
    png_data: &[u8],
    (x0, y0, x1, y1): (usize, usize, usize, usize),
    pred: impl Fn(u8, u8, u8) -> bool,
) -> usize {
    let (width, buf) = rgba(png_data);
    let mut n = 0;
    for y in y0..y1 {
        for x in x0..x1 {
            let i = (y * width + x) * 4;
            if buf[i + 3] == 255 && pred(buf[i], buf[i + 1], buf[i + 2]) {
                n += 1;
            }
        }
    }
    n
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    let file = fs::File::open(path).expect("open png");
    let decoder = png::Decoder::new(file);
    let reader = decoder.read_info().expect("decode");
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn logo_set_has_exact_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public/images");

    let written = logo::generate_logo_set(&out).expect("generate logos");
    assert_eq!(written.len(), logo::LOGO_SIZES.len());

    for (size, _) in logo::LOGO_SIZES {
        let path = out.join(logo::file_name(size));
        assert!(path.exists(), "missing {:?}", path);
        assert_eq!(png_dimensions(&path), (size, size));
    }

    let canonical = out.join("quanta-logo-512.png");
    assert_eq!(png_dimensions(&canonical), (512, 512));
}

#[test]
fn header_is_1500_by_500() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public").join(header::FILE_NAME);

    let bytes = header::generate_header(&path).expect("generate header");
    assert!(bytes > 0);
    assert_eq!(bytes, fs::metadata(&path).unwrap().len());
    assert_eq!(png_dimensions(&path), (1500, 500));
}

#[test]
fn logo_corners_are_transparent_and_center_is_gold() {
    let img = raster::rasterize(&logo::descriptor(128)).unwrap();
    let decoder = png::Decoder::new(&img.png_data[..]);
    let mut reader = decoder.read_info().expect("decode");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("frame");
    assert_eq!(info.color_type, png::ColorType::Rgba);

    let px = |x: usize, y: usize| {
        let i = (y * info.width as usize + x) * 4;
        (buf[i], buf[i + 1], buf[i + 2], buf[i + 3])
    };

    // rounded corner cuts the top-left pixel out
    assert_eq!(px(0, 0).3, 0);
    // left edge midway down is inside the rect, away from the glyph
    let (r, g, b, a) = px(2, 64);
    assert_eq!(a, 255);
    assert!(r > 200 && g > 160 && b < 80, "not gold: {:?}", (r, g, b));
}

#[test]
fn logo_glyph_is_drawn_in_ink() {
    let img = raster::rasterize(&logo::descriptor(512)).unwrap();
    // "Q" centred at x=256, cap height above the 368 px baseline
    let ink = count_in_box(&img.png_data, (128, 128, 384, 400), |r, g, b| {
        r < 60 && g < 60 && b < 60
    });
    assert!(ink > 2000, "logo glyph missing: {} ink pixels", ink);
}

#[test]
fn header_wordmark_and_tagline_are_drawn() {
    let img = raster::rasterize(&header::descriptor()).unwrap();
    let gold = |r: u8, g: u8, b: u8| r > 180 && g > 140 && b < 120;
    let wordmark = count_in_box(&img.png_data, (300, 140, 1200, 235), gold);
    assert!(wordmark > 2000, "wordmark missing: {} gold pixels", wordmark);

    let light = |r: u8, g: u8, b: u8| r > 150 && g > 150 && b > 150;
    let tagline = count_in_box(&img.png_data, (400, 280, 1100, 318), light);
    assert!(tagline > 200, "tagline missing: {} light pixels", tagline);
}

#[test]
fn rendering_is_deterministic() {
    let digest = || {
        let img = raster::rasterize(&header::descriptor()).unwrap();
        hex::encode(Sha256::digest(&img.png_data))
    };
    assert_eq!(digest(), digest());
}
