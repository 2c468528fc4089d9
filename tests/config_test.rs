//! Integration tests for configuration loading

use snack_shack::domain::Cents;
use snack_shack::infra::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[menu]
items = [
  { name = "Pretzel", price_cents = 350 },
  { name = "Juice", price_cents = 225 },
]

[snapshot]
file = "out/cart.csv"

[log]
file = "kiosk.log"

[ui]
tick_rate_ms = 250
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.catalog().len(), 2);
    assert_eq!(config.catalog().items()[0].name, "Pretzel");
    assert_eq!(config.catalog().unit_price("Juice"), Some(Cents(225)));
    assert_eq!(config.snapshot_file(), "out/cart.csv");
    assert_eq!(config.log_file(), "kiosk.log");
    assert_eq!(config.tick_rate_ms(), 250);
}

#[test]
fn test_missing_sections_use_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[snapshot]\nfile = \"custom.csv\"\n").unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    // Stock menu of five, custom snapshot path
    assert_eq!(config.catalog().len(), 5);
    assert_eq!(config.catalog().unit_price("Sandwich"), Some(Cents(600)));
    assert_eq!(config.snapshot_file(), "custom.csv");
    assert_eq!(config.tick_rate_ms(), 100);
}

#[test]
fn test_empty_menu_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[menu]\nitems = []\n").unwrap();
    temp_file.flush().unwrap();

    assert!(Config::from_file(temp_file.path()).is_err());
}

#[test]
fn test_load_from_path_fallback() {
    let config = Config::load_from_path("/nonexistent/config.toml");

    assert_eq!(config.catalog().len(), 5);
    assert_eq!(config.catalog().unit_price("Cookie"), Some(Cents(200)));
    assert_eq!(config.snapshot_file(), "data.csv");
    assert_eq!(config.log_file(), "snack-shack.log");
}
