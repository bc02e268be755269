use crate::contract::{SendError, MAX_RECORD_SIZE_BYTES, MAX_STREAM_NAME_LENGTH};

pub fn validate_stream_name(stream_name: &str) -> Result<(), SendError> {
    if stream_name.trim().is_empty() {
        return Err(SendError::InvalidStreamName(
            "Stream name cannot be empty".to_string(),
        ));
    }

    let length = stream_name.chars().count();
    if length > MAX_STREAM_NAME_LENGTH {
        return Err(SendError::InvalidStreamName(format!(
            "Stream name exceeds maximum length of {MAX_STREAM_NAME_LENGTH} characters (got {length})"
        )));
    }

    if !stream_name.chars().all(is_stream_name_char) {
        return Err(SendError::InvalidStreamName(format!(
            "Stream name \"{stream_name}\" contains invalid characters. Only alphanumeric characters, hyphens, underscores, and periods are allowed."
        )));
    }

    Ok(())
}

/// Rejects payloads whose UTF-8 encoding exceeds [`MAX_RECORD_SIZE_BYTES`].
pub fn validate_data(data: &str) -> Result<(), SendError> {
    let size_bytes = data.len();
    if size_bytes > MAX_RECORD_SIZE_BYTES {
        return Err(SendError::DataTooLarge {
            size_bytes,
            max_bytes: MAX_RECORD_SIZE_BYTES,
        });
    }

    Ok(())
}

fn is_stream_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}
