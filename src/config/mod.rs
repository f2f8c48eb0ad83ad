use serde::Deserialize;

use crate::services::history::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Google Cloud Vision API key. Without it the image endpoint answers 503.
    #[serde(default)]
    pub google_vision_api_key: Option<String>,

    /// Region code applied when a request does not name one (e.g., "SP").
    #[serde(default)]
    pub default_region: Option<String>,

    /// Number of analyses kept in the in-memory history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Largest accepted request body, image uploads included.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            google_vision_api_key: None,
            default_region: None,
            history_limit: default_history_limit(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config: AppConfig = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.google_vision_api_key.is_none());
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_reads_overrides() {
        let vars = vec![
            ("BIND_ADDR".to_string(), "127.0.0.1:8080".to_string()),
            ("GOOGLE_VISION_API_KEY".to_string(), "secret".to_string()),
            ("DEFAULT_REGION".to_string(), "MG".to_string()),
            ("HISTORY_LIMIT".to_string(), "3".to_string()),
        ];
        let config: AppConfig = envy::from_iter(vars).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.google_vision_api_key.as_deref(), Some("secret"));
        assert_eq!(config.default_region.as_deref(), Some("MG"));
        assert_eq!(config.history_limit, 3);
    }
}
