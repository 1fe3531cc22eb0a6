use chrono::NaiveDate;
use nalja::FormatConfig;

#[test]
fn test_default_config() {
    let config = FormatConfig::default();
    assert_eq!(config.date_format, "%Y-%m-%d");
    assert_eq!(config.datetime_format, "%Y-%m-%dT%H:%M:%S");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let mut config = FormatConfig::default();

    // A pattern chrono cannot parse back should fail
    config.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_load_from_str() {
    let config = FormatConfig::load_from_str(r#"date_format = "%Y-%m-%d""#).unwrap();
    assert_eq!(config.date_format, "%Y-%m-%d");
    // Omitted fields fall back to defaults
    assert_eq!(config.datetime_format, "%Y-%m-%dT%H:%M:%S");
}

#[test]
fn test_load_rejects_invalid_pattern() {
    assert!(FormatConfig::load_from_str(r#"date_format = "nope""#).is_err());
}

#[test]
fn test_config_formats_dates() {
    let config = FormatConfig::default();
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(config.format_date(date).unwrap(), "2024-01-15");
    assert_eq!(config.format_datetime(date).unwrap(), "2024-01-15T00:00:00");
}
