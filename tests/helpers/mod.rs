//! Test helper utilities for exercising the router in-process
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use menu_harmonizer::app_state::AppState;
use menu_harmonizer::build_router;
use menu_harmonizer::config::AppConfig;
use menu_harmonizer::services::ocr::{OcrError, TextRecognizer};

pub const MULTIPART_BOUNDARY: &str = "menu-harmonizer-test-boundary";

/// Recognizer that returns canned text, or fails when `text` is `None`.
pub struct FakeRecognizer {
    pub text: Option<String>,
}

#[async_trait]
impl TextRecognizer for FakeRecognizer {
    async fn recognize(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        self.text.clone().ok_or(OcrError::Api {
            code: 500,
            message: "fake provider failure".to_string(),
        })
    }
}

pub fn test_state(ocr: Option<Arc<dyn TextRecognizer>>) -> AppState {
    AppState::new(&AppConfig::default(), ocr)
}

pub fn test_app(state: AppState) -> Router {
    build_router(state, None)
}

pub fn app_with_recognizer(text: Option<&str>) -> Router {
    let recognizer: Arc<dyn TextRecognizer> = Arc::new(FakeRecognizer {
        text: text.map(str::to_string),
    });
    test_app(test_state(Some(recognizer)))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Multipart upload with an `image` part and optional text fields.
pub fn post_multipart(uri: &str, image: &[u8], fields: &[(&str, &str)]) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();

    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"image\"; filename=\"menu.png\"\r\n\
             Content-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(image);
    body.extend_from_slice(b"\r\n");

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"\r\n\r\n\
                 {value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
