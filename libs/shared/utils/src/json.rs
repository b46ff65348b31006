use axum::extract::FromRequest;

use shared_models::error::AppError;

/// `axum::Json` whose rejections are reported as [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    async fn echo(AppJson(body): AppJson<Named>) -> String {
        body.name
    }

    async fn post_json(content_type: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/echo", post(echo));
        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let (status, body) = post_json("application/json", r#"{"name":"Ann"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Ann");
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request_json() {
        let (status, body) = post_json("application/json", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_syntax_error_and_wrong_content_type_are_bad_request() {
        let (status, _) = post_json("application/json", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json("text/plain", r#"{"name":"Ann"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
