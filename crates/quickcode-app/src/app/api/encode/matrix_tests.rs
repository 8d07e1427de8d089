//! Unit tests for the matrix encode handler.

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use salvo::prelude::*;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};

    use crate::app::api::ENCODE_ROUTE_PREFIX;
    use crate::config::ConfigHandler;
    use crate::config::tests::test_settings;

    async fn post(body: &Value) -> (Option<StatusCode>, Value) {
        let router = Router::new()
            .hoop(ConfigHandler {
                settings: test_settings(),
            })
            .push(crate::app::api::routes().unwrap());

        let url = format!("http://127.0.0.1:5800{ENCODE_ROUTE_PREFIX}/matrix");
        let mut resp = TestClient::post(url)
            .json(body)
            .send(&Service::new(router))
            .await;
        let status = resp.status_code;
        (status, resp.take_json::<Value>().await.unwrap())
    }

    #[tokio::test]
    async fn test_matrix_uses_configured_dimension() {
        let (status, body) = post(&json!({
            "content_type": "PHONE_TYPE",
            "data": "4155551234"
        }))
        .await;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(body["payload"], "tel:4155551234");
        assert_eq!(body["display_text"], "415-555-1234");
        assert_eq!(body["width"], 100);
        assert_eq!(body["height"], 100);

        let rows = body["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 100);
        assert!(rows.iter().all(|row| row.as_str().is_some_and(|r| r.len() == 100)));
        assert!(
            rows.iter()
                .any(|row| row.as_str().is_some_and(|r| r.contains('1')))
        );
    }

    #[tokio::test]
    async fn test_matrix_honours_requested_size() {
        let (status, body) = post(&json!({
            "content_type": "TEXT_TYPE",
            "data": "hello",
            "width": 60,
            "height": 40
        }))
        .await;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(body["width"], 60);
        assert_eq!(body["height"], 40);
    }

    #[tokio::test]
    async fn test_non_qr_format_is_bad_request() {
        let (status, body) = post(&json!({
            "format": "CODE_128",
            "data": "12345"
        }))
        .await;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
        assert!(
            body["error"]
                .as_str()
                .is_some_and(|e| e.contains("CODE_128"))
        );
    }

    #[tokio::test]
    async fn test_oversized_request_is_bad_request() {
        let (status, body) = post(&json!({
            "type": "text",
            "data": "hi",
            "width": 100_000,
            "height": 100_000
        }))
        .await;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
        assert!(
            body["error"]
                .as_str()
                .is_some_and(|e| e.contains("4096"))
        );

        let (status, _) = post(&json!({
            "type": "text",
            "data": "hi",
            "width": 4097
        }))
        .await;
        assert_eq!(status, Some(StatusCode::BAD_REQUEST));

        let (status, _) = post(&json!({
            "type": "text",
            "data": "hi",
            "width": u32::MAX,
            "height": u32::MAX
        }))
        .await;
        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_no_result_is_unprocessable() {
        let (status, _) = post(&json!({"content_type": "LOCATION_TYPE", "latitude": 1.0})).await;
        assert_eq!(status, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }
}
