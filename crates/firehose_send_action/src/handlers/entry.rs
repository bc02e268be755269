use firehose_send_core::contract::{
    AWS_REGION_INPUT, DATA_INPUT, RECORD_ID_OUTPUT, STREAM_NAME_INPUT,
};
use firehose_send_core::RecordConfig;

use crate::adapters::action_environment::{ActionEnvironment, LogLevel};
use crate::adapters::record_submitter::RecordSubmitter;
use crate::handlers::send::send_record;

const SUMMARY_RULE_WIDTH: usize = 50;

/// Runs the action once: reads inputs, connects, submits, publishes `record-id`.
///
/// `connect` receives the optional `aws-region` input and is only called once
/// both required inputs are present. Any returned error is meant to fail the
/// process.
pub fn run_action<S, F>(
    environment: &impl ActionEnvironment,
    connect: F,
) -> Result<Option<String>, String>
where
    S: RecordSubmitter,
    F: FnOnce(Option<&str>) -> Result<S, String>,
{
    let stream_name = environment
        .get_input(STREAM_NAME_INPUT, true)
        .map_err(|error| error.to_string())?;
    let data = environment
        .get_input(DATA_INPUT, true)
        .map_err(|error| error.to_string())?;
    let region = environment
        .get_input(AWS_REGION_INPUT, false)
        .map_err(|error| error.to_string())?;

    environment.log(LogLevel::Info, "Firehose Send Record");
    environment.log(LogLevel::Info, &format!("Stream Name: {stream_name}"));

    let submitter = connect(Some(region.as_str()).filter(|value| !value.is_empty()))?;
    let config = RecordConfig::new(stream_name, data);
    let record_id = send_record(&submitter, environment, &config).into_outcome()?;

    if let Some(record_id) = &record_id {
        environment.set_output(RECORD_ID_OUTPUT, record_id)?;
    }
    log_summary(environment, record_id.as_deref());

    Ok(record_id)
}

fn log_summary(environment: &impl ActionEnvironment, record_id: Option<&str>) {
    let rule = "=".repeat(SUMMARY_RULE_WIDTH);
    environment.log(LogLevel::Info, "");
    environment.log(LogLevel::Info, &rule);
    environment.log(LogLevel::Info, "Record sent successfully");
    if let Some(record_id) = record_id {
        environment.log(LogLevel::Info, &format!("Record ID: {record_id}"));
    }
    environment.log(LogLevel::Info, &rule);
}
