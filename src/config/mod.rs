use std::env;

/// Storage client and output configuration.
///
/// Credentials are never read here; the AWS SDK resolves them through its own
/// provider chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Custom S3 endpoint, e.g. a MinIO server (default: unset, use AWS)
    pub endpoint_url: Option<String>,

    /// Region override (default: unset, use the SDK default chain)
    pub region: Option<String>,

    /// Path-style bucket addressing (default: true when an endpoint is set)
    pub force_path_style: bool,

    /// Output style for run reports: "console" or "log" (default: "console")
    pub report_style: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            region: None,
            force_path_style: false,
            report_style: "console".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint_url = non_empty("S3_ENDPOINT");
        let force_path_style = non_empty("S3_FORCE_PATH_STYLE")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(endpoint_url.is_some());

        Self {
            region: non_empty("S3_REGION"),
            force_path_style,
            report_style: non_empty("REPORT_STYLE").unwrap_or(default.report_style),
            endpoint_url,
        }
    }
}
