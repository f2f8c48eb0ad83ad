use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{history::AnalysisHistory, ocr::TextRecognizer};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Absent when no recognition provider is configured.
    pub ocr: Option<Arc<dyn TextRecognizer>>,
    pub history: Arc<AnalysisHistory>,
    pub default_region: Option<String>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: &AppConfig, ocr: Option<Arc<dyn TextRecognizer>>) -> Self {
        Self {
            ocr,
            history: Arc::new(AnalysisHistory::new(config.history_limit)),
            default_region: config.default_region.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// The request's region, or the configured default.
    pub fn region_or_default<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        requested
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .or(self.default_region.as_deref())
    }
}
