use super::*;

#[test]
fn defaults_are_fill_and_center() {
    let c = BackgroundConfig::default();
    assert_eq!(c.mode, BackgroundMode::Fill);
    assert_eq!(c.gravity, BackgroundGravity::Center);
    assert_eq!(c.image, None);
    assert_eq!(c.color, None);
}

#[test]
fn from_strings_runs_the_parsers() {
    let c = BackgroundConfig::from_strings(
        Some(PathBuf::from("wall.png")),
        Some("tile"),
        Some("south"),
        Some("#112233"),
    )
    .unwrap();
    assert_eq!(c.mode, BackgroundMode::Tile);
    assert_eq!(c.gravity, BackgroundGravity::South);
    assert_eq!(c.color, Some(Rgba8::opaque(0x11, 0x22, 0x33)));
    c.validate().unwrap();

    let c = BackgroundConfig::from_strings(None, Some("zoom"), Some("up"), None).unwrap();
    assert_eq!(c.mode, BackgroundMode::Invalid);
    assert_eq!(c.gravity, BackgroundGravity::Invalid);

    assert!(BackgroundConfig::from_strings(None, None, None, Some("nope")).is_err());
}

#[test]
fn override_with_replaces_only_given_fields() {
    let mut c = BackgroundConfig {
        image: Some(PathBuf::from("wall.png")),
        mode: BackgroundMode::Fit,
        gravity: BackgroundGravity::North,
        color: Some(Rgba8::opaque(1, 2, 3)),
    };

    c.override_with(None, Some("fill"), None, None).unwrap();
    assert_eq!(c.mode, BackgroundMode::Fill);
    assert_eq!(c.image, Some(PathBuf::from("wall.png")));
    assert_eq!(c.gravity, BackgroundGravity::North);
    assert_eq!(c.color, Some(Rgba8::opaque(1, 2, 3)));

    c.override_with(Some(PathBuf::from("other.png")), None, Some("west"), Some("#ffffff"))
        .unwrap();
    assert_eq!(c.image, Some(PathBuf::from("other.png")));
    assert_eq!(c.gravity, BackgroundGravity::West);
    assert_eq!(c.color, Some(Rgba8::opaque(255, 255, 255)));

    let before = c.clone();
    assert!(c.override_with(None, Some("tile"), None, Some("#zzzzzz")).is_err());
    assert_eq!(c, before);
}

#[test]
fn validate_checks_mode_requirements() {
    let invalid = BackgroundConfig {
        mode: BackgroundMode::Invalid,
        ..BackgroundConfig::default()
    };
    assert!(matches!(
        invalid.validate(),
        Err(BackdropError::Validation(_))
    ));

    let no_image = BackgroundConfig::default();
    let err = no_image.validate().unwrap_err();
    assert!(err.to_string().contains("fill mode requires an image"));

    let solid_without_color = BackgroundConfig {
        mode: BackgroundMode::SolidColor,
        ..BackgroundConfig::default()
    };
    assert!(solid_without_color.validate().is_err());

    let solid = BackgroundConfig {
        mode: BackgroundMode::SolidColor,
        color: Some(Rgba8::opaque(0, 0, 0)),
        ..BackgroundConfig::default()
    };
    solid.validate().unwrap();
}

#[test]
fn json_config_resolves_relative_image() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bg.json");
    std::fs::write(
        &path,
        r##"{ "image": "wall.png", "mode": "fit", "color": "#00000080" }"##,
    )
    .unwrap();

    let c = BackgroundConfig::from_json_path(&path).unwrap();
    assert_eq!(c.image, Some(dir.join("wall.png")));
    assert_eq!(c.mode, BackgroundMode::Fit);
    assert_eq!(c.gravity, BackgroundGravity::Center);
    assert_eq!(
        c.color,
        Some(Rgba8 {
            r: 0,
            g: 0,
            b: 0,
            a: 128
        })
    );
}

#[test]
fn json_config_reports_parse_errors() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.json");
    std::fs::write(&path, "{ \"mode\": ").unwrap();

    let err = BackgroundConfig::from_json_path(&path).unwrap_err();
    assert!(err.to_string().contains("parse background config"));
}
