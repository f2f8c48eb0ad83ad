use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Turns a menu photograph into raw text lines.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}

/// Client for Google Cloud Vision text detection.
pub struct VisionClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    requests: [AnnotateImageRequest<'a>; 1],
}

#[derive(Serialize)]
struct AnnotateImageRequest<'a> {
    image: ImageContent,
    features: [Feature<'a>; 1],
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    full_text_annotation: Option<FullTextAnnotation>,
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    error: Option<ApiStatus>,
}

#[derive(Debug, Deserialize)]
struct FullTextAnnotation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

impl VisionClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, OcrError> {
        Self::with_endpoint(api_key, VISION_ENDPOINT)
    }

    /// Client against a non-default endpoint (regional endpoints, local stubs).
    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, OcrError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(OcrError::NotConfigured);
        }

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl TextRecognizer for VisionClient {
    /// Send a menu photo to Vision TEXT_DETECTION and return the full recognized text.
    async fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        let start = std::time::Instant::now();

        let body = AnnotateRequest {
            requests: [AnnotateImageRequest {
                image: ImageContent {
                    content: base64::engine::general_purpose::STANDARD.encode(image_bytes),
                },
                features: [Feature {
                    kind: "TEXT_DETECTION",
                }],
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OcrError::Api {
                code: i32::from(status.as_u16()),
                message,
            });
        }

        let payload = response.bytes().await?;
        let annotated: AnnotateResponse = serde_json::from_slice(&payload)?;
        let text = extract_text(annotated)?;

        tracing::info!(
            bytes = image_bytes.len(),
            chars = text.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Text recognition complete"
        );

        Ok(text)
    }
}

/// Pull the recognized text out of an annotate response.
///
/// Prefers the full-text annotation, then the first text annotation. An
/// image with no readable text yields an empty string.
fn extract_text(response: AnnotateResponse) -> Result<String, OcrError> {
    let Some(first) = response.responses.into_iter().next() else {
        return Ok(String::new());
    };

    if let Some(status) = first.error {
        return Err(OcrError::Api {
            code: status.code,
            message: status.message,
        });
    }

    if let Some(full) = first.full_text_annotation {
        return Ok(full.text);
    }

    Ok(first
        .text_annotations
        .into_iter()
        .next()
        .map(|annotation| annotation.description)
        .unwrap_or_default())
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Vision API error {code}: {message}")]
    Api { code: i32, message: String },

    #[error("Failed to parse Vision response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Text recognition is not configured")]
    NotConfigured,
}
