use memopairs::config::Config;
use std::fs;
use tempfile::TempDir;

/// Round-trip a config through a TOML file on disk.
#[test]
fn test_config_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config::default();
    let contents = toml::to_string(&config).unwrap();
    fs::write(&config_path, contents).unwrap();

    let loaded: Config = toml::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();

    assert_eq!(config.card_images, loaded.card_images);
    assert_eq!(config.columns, loaded.columns);
    assert_eq!(config.log_level, loaded.log_level);
    assert!(loaded.validate().is_ok());
}

/// Missing fields fall back to defaults instead of failing to parse.
#[test]
fn test_partial_config_uses_defaults() {
    let config: Config = toml::from_str("columns = 3\n").unwrap();

    assert_eq!(config.columns, 3);
    assert_eq!(config.card_images.len(), 6);
    assert_eq!(config.log_level, "info");
    assert!(config.validate().is_ok());
}

/// A custom image list drives the pair count.
#[test]
fn test_custom_image_list_validates() {
    let config: Config = toml::from_str(
        r#"
card_images = ["a.png", "b.png"]
columns = 2
"#,
    )
    .unwrap();

    assert_eq!(config.card_images.len(), 2);
    assert!(config.validate().is_ok());
}
