use rental_property_analyzer::config::{self, Config};
use rental_property_analyzer::property::ValidatedInput;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.defaults.mortgage_rate, 0.065);
    assert_eq!(cfg.defaults.length_of_mortgage, 30);
}

#[test]
fn saved_settings_are_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko".to_string();
    cfg.defaults.vacancy_rate = 0.08;
    cfg.save(&path).unwrap();

    let loaded = config::load_or_default(&path).unwrap();
    assert_eq!(loaded.language, "ko");
    assert_eq!(loaded.defaults.vacancy_rate, 0.08);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n").unwrap();

    let loaded = config::load_or_default(&path).unwrap();
    assert_eq!(loaded.language, "en");
    assert_eq!(loaded.store_path, Config::default().store_path);
    assert_eq!(loaded.defaults, config::default_form());
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").unwrap();
    assert!(config::load_or_default(&path).is_err());
}

#[test]
fn default_form_needs_only_an_address() {
    let mut form = config::default_form();
    assert!(ValidatedInput::try_from(form.clone()).is_err());
    form.address = "1 Main St".to_string();
    assert!(ValidatedInput::try_from(form).is_ok());
}
