//! Upload configuration.
//!
//! Compile-time defaults for the processing endpoint and client-side
//! limits, gathered into [`UploadConfig`] for the widget.

use serde::{Deserialize, Serialize};

/// Endpoint path that accepts the multipart upload.
pub const PROCESS_ENDPOINT: &str = "/api/process-excel";

/// Maximum accepted size per file (in bytes).
///
/// 10 MB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Filename used when saving the processed result.
pub const DOWNLOAD_FILE_NAME: &str = "processed-data.xlsx";

/// Prefix of each multipart field name, followed by the 0-based position.
pub const FIELD_PREFIX: &str = "file-";

/// How a drop batch containing invalid files is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchPolicy {
    /// One bad file rejects the whole batch.
    #[default]
    AllOrNothing,
    /// Valid files are kept, invalid ones are reported.
    PerFile,
}

/// Settings consumed by [`crate::UploadWidget`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    /// Path the selection is POSTed to.
    pub endpoint: String,
    /// Size ceiling per file, inclusive.
    pub max_file_size: u64,
    /// Batch rejection policy.
    pub batch_policy: BatchPolicy,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: PROCESS_ENDPOINT.to_string(),
            max_file_size: MAX_FILE_SIZE,
            batch_policy: BatchPolicy::AllOrNothing,
        }
    }
}

impl UploadConfig {
    /// Same defaults, posting to `base_url` + [`PROCESS_ENDPOINT`].
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), PROCESS_ENDPOINT),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UploadConfig::default();
        assert_eq!(config.endpoint, "/api/process-excel");
        assert_eq!(config.max_file_size, 10_485_760);
        assert_eq!(config.batch_policy, BatchPolicy::AllOrNothing);
    }

    #[test]
    fn test_base_url_joins_endpoint() {
        assert_eq!(UploadConfig::with_base_url("").endpoint, "/api/process-excel");
        assert_eq!(
            UploadConfig::with_base_url("http://localhost:8080/").endpoint,
            "http://localhost:8080/api/process-excel"
        );
    }

    #[test]
    fn test_config_serde_names() {
        let json = serde_json::to_value(UploadConfig::default()).unwrap();
        assert_eq!(json["maxFileSize"], 10_485_760);
        assert_eq!(json["batchPolicy"], "all-or-nothing");
    }
}
