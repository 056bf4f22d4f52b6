use super::*;

#[test]
fn new_rejects_empty_and_oversized_canvas() {
    assert!(matches!(
        CpuCanvas::new(Canvas::new(0, 10)),
        Err(BackdropError::Render(_))
    ));
    assert!(CpuCanvas::new(Canvas::new(70_000, 10)).is_err());
    assert!(CpuCanvas::new(Canvas::new(16, 9)).is_ok());
}

#[test]
fn save_restore_round_trips_transform() {
    let mut c = CpuCanvas::new(Canvas::new(8, 8)).unwrap();
    c.save();
    c.scale(2.0, 3.0);
    assert_eq!(c.transform(), Affine::scale_non_uniform(2.0, 3.0));
    c.save();
    c.scale(0.5, 1.0);
    assert_eq!(c.transform(), Affine::scale_non_uniform(1.0, 3.0));
    c.restore();
    assert_eq!(c.transform(), Affine::scale_non_uniform(2.0, 3.0));
    c.restore();
    assert_eq!(c.transform(), Affine::IDENTITY);

    // Unbalanced restore leaves the state alone.
    c.restore();
    assert_eq!(c.transform(), Affine::IDENTITY);
}

#[test]
fn finish_without_paint_is_transparent() {
    let frame = CpuCanvas::new(Canvas::new(4, 3)).unwrap().finish();
    assert_eq!((frame.width, frame.height), (4, 3));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 4 * 3 * 4);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn frame_pixel_lookup_is_bounds_checked() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        premultiplied: true,
    };
    assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
}

#[test]
fn straight_conversion_unpremultiplies() {
    let frame = FrameRGBA {
        width: 3,
        height: 1,
        data: vec![128, 50, 0, 128, 10, 20, 30, 255, 0, 0, 0, 0],
        premultiplied: true,
    };
    assert_eq!(
        frame.to_straight_rgba8(),
        vec![255, 100, 0, 128, 10, 20, 30, 255, 0, 0, 0, 0]
    );

    let straight = FrameRGBA {
        premultiplied: false,
        ..frame.clone()
    };
    assert_eq!(straight.to_straight_rgba8(), frame.data);
}

#[test]
fn pixmap_conversion_checks_length() {
    assert!(image_premul_bytes_to_pixmap(&[0; 15], 2, 2).is_err());
    assert!(image_premul_bytes_to_pixmap(&[0; 16], 2, 2).is_ok());
    assert!(image_premul_bytes_to_pixmap(&[], 70_000, 0).is_err());
}
