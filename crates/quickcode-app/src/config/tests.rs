use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use super::*;

/// Settings with the built-in defaults, for handler tests.
pub(crate) fn test_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8699,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        encoder: EncoderConfig {
            dimension: 100,
            error_correction: ErrorCorrection::L,
            margin: 4,
            max_dimension: 4096,
        },
        phone: PhoneConfig {
            style: PhoneStyle::Nanp,
        },
        titles: TitleCatalog::default(),
    }
}

#[handler]
async fn report_port(depot: &mut Depot) -> String {
    match get_config_from_depot(depot) {
        Ok(settings) => settings.server.port.to_string(),
        Err(e) => e.to_string(),
    }
}

#[tokio::test]
async fn config_handler_injects_settings() {
    let router = Router::new()
        .hoop(ConfigHandler {
            settings: test_settings(),
        })
        .get(report_port);

    let body = TestClient::get("http://127.0.0.1:5800/")
        .send(&Service::new(router))
        .await
        .take_string()
        .await
        .unwrap();

    assert_eq!(body, "8699");
}

#[tokio::test]
async fn missing_settings_is_reported() {
    let router = Router::new().get(report_port);

    let body = TestClient::get("http://127.0.0.1:5800/")
        .send(&Service::new(router))
        .await
        .take_string()
        .await
        .unwrap();

    assert!(body.contains("Configuration not found in depot"));
}
