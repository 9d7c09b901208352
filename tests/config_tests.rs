//! Config file loading and validation against real files.

use compliance_suite::config::{
    generate_example_config, load_config_file, load_or_default, ConfigFileError, SuiteConfig,
    Validatable,
};
use compliance_suite::model::{ReportKind, ViewId};
use compliance_suite::tui::AppSettings;
use std::io::Write;
use std::time::Duration;
use tempfile::{tempdir, NamedTempFile};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn full_config_reaches_app_settings() {
    let file = write_config(
        "tui:\n  theme: high-contrast\n  default_view: ekyc\n  tick_rate_ms: 100\n  mouse_enabled: false\n\
         reporting:\n  generation_delay_ms: 750\n  default_report_kind: sar\n",
    );
    let config = load_config_file(file.path()).unwrap();
    assert!(config.is_valid());

    let settings = AppSettings::from_config(&config);
    assert_eq!(settings.initial_view, ViewId::Ekyc);
    assert_eq!(settings.tick_rate, Duration::from_millis(100));
    assert_eq!(settings.generation_delay, Duration::from_millis(750));
    assert_eq!(settings.default_report_kind, Some(ReportKind::Sar));
    assert!(!settings.mouse_enabled);
}

#[test]
fn out_of_range_values_fail_validation() {
    let file = write_config(
        "tui:\n  theme: solarized\n  tick_rate_ms: 5\nreporting:\n  generation_delay_ms: 120000\n  default_report_kind: basel\n",
    );
    let config = load_config_file(file.path()).unwrap();
    let errors = config.validate();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.iter().any(|f| f.contains("theme")));
    assert!(fields.iter().any(|f| f.contains("tick_rate_ms")));
    assert!(fields.iter().any(|f| f.contains("generation_delay_ms")));
    assert!(fields.iter().any(|f| f.contains("default_report_kind")));
}

#[test]
fn unknown_view_is_a_parse_error() {
    let file = write_config("tui:\n  default_view: treasury\n");
    assert!(matches!(
        load_config_file(file.path()),
        Err(ConfigFileError::Parse(_))
    ));

    let (config, loaded_from) = load_or_default(Some(file.path()));
    assert_eq!(config, SuiteConfig::default());
    assert!(loaded_from.is_none());
}

#[test]
fn missing_explicit_path_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");
    assert!(matches!(
        load_config_file(&missing),
        Err(ConfigFileError::NotFound(_))
    ));
    let (config, loaded_from) = load_or_default(Some(&missing));
    assert_eq!(config, SuiteConfig::default());
    assert!(loaded_from.is_none());
}

#[test]
fn example_config_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, generate_example_config()).unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config, SuiteConfig::default());
    assert!(config.is_valid());
}

#[test]
fn command_line_overrides_win() {
    let file = write_config("tui:\n  theme: light\n  default_view: fraud\n");
    let mut config = load_config_file(file.path()).unwrap();
    config.apply_overrides(Some(ViewId::Aml), Some("dark"));
    assert_eq!(config.tui.default_view, ViewId::Aml);
    assert_eq!(config.tui.theme, "dark");
}
