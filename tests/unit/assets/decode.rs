use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let buf = png_bytes(1, 1, vec![100u8, 50u8, 200u8, 128u8]);

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.width, 1);
    assert_eq!(decoded.height, 1);
    assert_eq!(decoded.size(), Size::new(1.0, 1.0));
    assert_eq!(
        decoded.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_image_rejects_garbage() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, BackdropError::Decode(_)));
    assert!(err.to_string().contains("failed to read background image"));
}

#[test]
fn load_background_image_reads_from_disk() {
    let dir = std::path::PathBuf::from("target").join("decode_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("two_by_one.png");
    std::fs::write(&path, png_bytes(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255])).unwrap();

    let img = load_background_image(&path).unwrap();
    assert_eq!((img.width, img.height), (2, 1));
    assert_eq!(
        img.rgba8_premul.as_slice(),
        &[255, 0, 0, 255, 0, 0, 255, 255]
    );
}

#[test]
fn load_background_image_missing_file_is_error() {
    let err = load_background_image(Path::new("target/does/not/exist.png")).unwrap_err();
    assert!(err.to_string().contains("read background image"));
}

#[test]
fn from_rgba8_premul_validates_shape() {
    assert!(BackgroundImage::from_rgba8_premul(0, 1, vec![]).is_err());
    assert!(BackgroundImage::from_rgba8_premul(2, 2, vec![0; 15]).is_err());
    assert!(BackgroundImage::from_rgba8_premul(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn from_rgba8_premul_rejects_sides_past_the_raster_limit() {
    let err = BackgroundImage::from_rgba8_premul(70_000, 1, vec![255; 70_000 * 4]).unwrap_err();
    assert!(matches!(err, BackdropError::Decode(_)));
    assert!(err.to_string().contains("70000x1"));

    assert!(BackgroundImage::from_rgba8_premul(1, 70_000, vec![255; 70_000 * 4]).is_err());
    let widest = vec![255; MAX_IMAGE_SIDE as usize * 4];
    assert!(BackgroundImage::from_rgba8_premul(MAX_IMAGE_SIDE, 1, widest).is_ok());
}
