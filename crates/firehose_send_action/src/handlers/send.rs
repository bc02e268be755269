use firehose_send_core::{
    validate_data, validate_stream_name, RecordConfig, SendError, SubmissionResult,
};

use crate::adapters::action_environment::{ActionEnvironment, LogLevel};
use crate::adapters::record_submitter::RecordSubmitter;

/// Validates `config` and submits it as one record.
///
/// Never returns an error: validation and remote failures are folded into a
/// failed [`SubmissionResult`]. The submitter is called at most once.
pub fn send_record(
    submitter: &impl RecordSubmitter,
    environment: &impl ActionEnvironment,
    config: &RecordConfig,
) -> SubmissionResult {
    match submit_validated(submitter, environment, config) {
        Ok(record_id) => SubmissionResult::succeeded(record_id),
        Err(error) => {
            let message = error.to_string();
            environment.log(
                LogLevel::Error,
                &format!("Failed to send record: {message}"),
            );
            SubmissionResult::failed(message)
        }
    }
}

fn submit_validated(
    submitter: &impl RecordSubmitter,
    environment: &impl ActionEnvironment,
    config: &RecordConfig,
) -> Result<Option<String>, SendError> {
    validate_stream_name(&config.stream_name)?;
    validate_data(&config.data)?;

    environment.log(
        LogLevel::Info,
        &format!("Sending record to stream: {}", config.stream_name),
    );
    environment.log(
        LogLevel::Info,
        &format!("Data size: {} bytes", config.payload_size()),
    );

    let record_id = submitter
        .put_record(&config.stream_name, config.payload_bytes())
        .map_err(SendError::RemoteSubmission)?;

    environment.log(LogLevel::Info, "✓ Record sent successfully");
    if let Some(record_id) = &record_id {
        environment.log(LogLevel::Info, &format!("Record ID: {record_id}"));
    }

    Ok(record_id)
}
