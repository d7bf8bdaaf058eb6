use indoc::indoc;
use owasp_risk_rating::config::{load_config_from, RiskRatingConfig, CONFIG_FILE_NAME};
use owasp_risk_rating::formatting::ColorMode;
use owasp_risk_rating::OutputFormat;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_found_in_ancestor_directory() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [output]
            default_format = "markdown"
            color = "never"
            show_factors = false
            precision = 1
        "#},
    )
    .unwrap();
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = load_config_from(&nested);
    assert_eq!(config.output.default_format, OutputFormat::Markdown);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.show_factors);
    assert_eq!(config.output.precision, 1);
}

#[test]
fn test_nearest_config_wins() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        "[output]\ndefault_format = \"yaml\"\n",
    )
    .unwrap();
    let nested = root.path().join("project");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        nested.join(CONFIG_FILE_NAME),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    assert_eq!(
        load_config_from(&nested).output.default_format,
        OutputFormat::Json
    );
}

#[test]
fn test_malformed_config_uses_defaults() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join(CONFIG_FILE_NAME), "[output\nprecision = 2").unwrap();

    assert_eq!(load_config_from(root.path()), RiskRatingConfig::default());
}
