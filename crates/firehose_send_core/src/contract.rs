use serde::{Deserialize, Serialize};

pub const MAX_STREAM_NAME_LENGTH: usize = 64;
pub const MAX_RECORD_SIZE_BYTES: usize = 1000 * 1024;

pub const STREAM_NAME_INPUT: &str = "stream-name";
pub const DATA_INPUT: &str = "data";
pub const AWS_REGION_INPUT: &str = "aws-region";
pub const RECORD_ID_OUTPUT: &str = "record-id";

/// A single record addressed to one delivery stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordConfig {
    pub stream_name: String,
    pub data: String,
}

impl RecordConfig {
    pub fn new(stream_name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            data: data.into(),
        }
    }

    pub fn payload_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    pub fn payload_size(&self) -> usize {
        self.data.len()
    }
}

/// Outcome of one submission attempt.
///
/// `record_id` is only ever set on success and `error` only on failure. Use
/// [`SubmissionResult::succeeded`] and [`SubmissionResult::failed`] to build one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn succeeded(record_id: Option<String>) -> Self {
        Self {
            success: true,
            record_id,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            record_id: None,
            error: Some(message.into()),
        }
    }

    /// Collapses the result into the record id or the failure message.
    pub fn into_outcome(self) -> Result<Option<String>, String> {
        if self.success {
            Ok(self.record_id)
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "Failed to send record".to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("{0}")]
    InvalidStreamName(String),
    #[error(
        "Data size ({size_bytes} bytes) exceeds maximum allowed size ({max_bytes} bytes / 1000 KB)"
    )]
    DataTooLarge { size_bytes: usize, max_bytes: usize },
    #[error("{0}")]
    RemoteSubmission(String),
    #[error("Input required and not supplied: {0}")]
    MissingRequiredInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_result_without_message_falls_back_to_generic_error() {
        let result = SubmissionResult {
            success: false,
            record_id: None,
            error: None,
        };

        assert_eq!(
            result.into_outcome(),
            Err("Failed to send record".to_string())
        );
    }

    #[test]
    fn succeeded_result_keeps_optional_record_id() {
        assert_eq!(
            SubmissionResult::succeeded(Some("abc".to_string())).into_outcome(),
            Ok(Some("abc".to_string()))
        );
        assert_eq!(SubmissionResult::succeeded(None).into_outcome(), Ok(None));
    }

    #[test]
    fn result_serializes_only_the_populated_side() {
        let success = serde_json::to_value(SubmissionResult::succeeded(Some("abc".to_string())))
            .expect("result should serialize");
        assert_eq!(success, serde_json::json!({"success": true, "recordId": "abc"}));

        let failure = serde_json::to_value(SubmissionResult::failed("throttled"))
            .expect("result should serialize");
        assert_eq!(failure, serde_json::json!({"success": false, "error": "throttled"}));
    }

    #[test]
    fn data_too_large_message_reports_both_sizes() {
        let error = SendError::DataTooLarge {
            size_bytes: 1_024_001,
            max_bytes: MAX_RECORD_SIZE_BYTES,
        };

        assert_eq!(
            error.to_string(),
            "Data size (1024001 bytes) exceeds maximum allowed size (1024000 bytes / 1000 KB)"
        );
    }

    #[test]
    fn payload_size_counts_utf8_bytes() {
        let config = RecordConfig::new("events", "héllo");
        assert_eq!(config.payload_size(), 6);
    }
}
