//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_default_titles_are_english() {
    tracing::debug!("Testing default title catalog");

    let titles = TitleCatalog::default();

    assert_eq!(titles.text, "Text");
    assert_eq!(titles.email, "E-Mail");
    assert_eq!(titles.phone, "Phone");
    assert_eq!(titles.sms, "SMS");
    assert_eq!(titles.contact, "Contact");
    assert_eq!(titles.location, "Location");
}

#[test]
fn test_server_bind_addr() {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8699,
    };

    assert_eq!(config.bind_addr(), "127.0.0.1:8699");
}

#[test]
fn test_enum_defaults() {
    assert_eq!(ErrorCorrection::default(), ErrorCorrection::L);
    assert_eq!(PhoneStyle::default(), PhoneStyle::Nanp);
}

#[test]
fn test_settings_from_toml_source() {
    let raw = r#"
[server]
host = "localhost"
port = 9000

[logging]
level = "info"

[encoder]
dimension = 256
error_correction = "H"
margin = 2
max_dimension = 1024

[phone]
style = "pass_through"

[titles]
email = "Courriel"
"#;

    let settings = Config::builder()
        .add_source(config::File::from_str(raw, config::FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap();

    assert_eq!(settings.server.port, 9000);
    assert_eq!(settings.encoder.dimension, 256);
    assert_eq!(settings.encoder.max_dimension, 1024);
    assert_eq!(settings.encoder.error_correction, ErrorCorrection::H);
    assert_eq!(settings.phone.style, PhoneStyle::PassThrough);
    assert_eq!(settings.titles.email, "Courriel");
    // Unset labels keep their defaults
    assert_eq!(settings.titles.contact, "Contact");
}

#[test]
fn test_settings_debug() {
    let settings = Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8699,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
        encoder: EncoderConfig {
            dimension: 400,
            error_correction: ErrorCorrection::L,
            margin: 4,
            max_dimension: 4096,
        },
        phone: PhoneConfig {
            style: PhoneStyle::Nanp,
        },
        titles: TitleCatalog::default(),
    };

    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("encoder"));
    assert!(debug_str.contains("titles"));
}
