//! 설정 파일 로드/저장 테스트.
use molarity_calculator::config::{self, Config, ConfigError};
use molarity_calculator::quantity::Quantity;
use molarity_calculator::units::{MassUnit, VolumeUnit};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_create(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_config_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.display_precision = 3;
    cfg.default_units.mass = MassUnit::Gram;
    cfg.default_units.volume = VolumeUnit::Liter;
    cfg.save_to(&path).unwrap();
    let loaded = config::load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "display_precision = 2\n[default_units]\nmass = \"Kilogram\"\n").unwrap();
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg.display_precision, 2);
    assert_eq!(cfg.language, "auto");
    let form = cfg.new_form();
    assert_eq!(form.row(Quantity::Mass).unit, "kilograms");
    assert_eq!(form.row(Quantity::Volume).unit, "mL");
    assert_eq!(form.precision(), 2);
}

#[test]
fn bad_unit_or_log_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[default_units]\nmass = \"Stone\"\n").unwrap();
    assert!(matches!(config::load_from(&path), Err(ConfigError::Serde(_))));

    std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
    assert!(matches!(
        config::load_from(&path),
        Err(ConfigError::InvalidLogLevel(_))
    ));
}
