use std::path::PathBuf;
use std::process::ExitCode;

use aws_sdk_firehose::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_firehose::operation::put_record::PutRecordError;
use aws_sdk_firehose::primitives::Blob;
use aws_sdk_firehose::types::Record;
use clap::Parser;
use firehose_send_action::adapters::action_environment::{
    ActionEnvironment, GithubActionsEnvironment, LogLevel,
};
use firehose_send_action::adapters::record_submitter::RecordSubmitter;
use firehose_send_action::handlers::entry::run_action;
use firehose_send_action::observe::init_tracing;
use firehose_send_core::contract::{AWS_REGION_INPUT, DATA_INPUT, STREAM_NAME_INPUT};

/// Send one record to an Amazon Kinesis Data Firehose delivery stream.
///
/// Inside a workflow the inputs come from `INPUT_*` variables; flags override them.
#[derive(Parser)]
#[command(name = "firehose-send")]
struct Cli {
    /// Delivery stream name (overrides INPUT_STREAM-NAME)
    #[arg(long)]
    stream_name: Option<String>,
    /// Record payload (overrides INPUT_DATA)
    #[arg(long, conflicts_with = "data_file")]
    data: Option<String>,
    /// Read the record payload from a file
    #[arg(long)]
    data_file: Option<PathBuf>,
    /// AWS region (overrides INPUT_AWS-REGION and the default provider chain)
    #[arg(long)]
    aws_region: Option<String>,
}

struct FirehoseRecordSubmitter {
    firehose_client: aws_sdk_firehose::Client,
}

impl RecordSubmitter for FirehoseRecordSubmitter {
    fn put_record(&self, stream_name: &str, data: &[u8]) -> Result<Option<String>, String> {
        let record = Record::builder()
            .data(Blob::new(data.to_vec()))
            .build()
            .map_err(|error| format!("failed to build firehose record: {error}"))?;
        let delivery_stream_name = stream_name.to_string();
        let client = self.firehose_client.clone();

        tracing::debug!(stream_name, size_bytes = data.len(), "put_record");
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_record()
                    .delivery_stream_name(delivery_stream_name)
                    .record(record)
                    .send()
                    .await
                    .map(|output| Some(output.record_id().to_string()).filter(|id| !id.is_empty()))
                    .map_err(|error| remote_error_message(&error))
            })
        })
    }
}

fn remote_error_message(error: &SdkError<PutRecordError>) -> String {
    tracing::debug!(error = %DisplayErrorContext(error), "put_record failed");
    error
        .as_service_error()
        .and_then(|service_error| service_error.message())
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(error).to_string())
}

fn connect_firehose(region: Option<&str>) -> Result<FirehoseRecordSubmitter, String> {
    let region = region.map(|value| aws_config::Region::new(value.to_string()));
    let sdk_config = tokio::task::block_in_place(|| {
        tokio::runtime::Handle::current().block_on(async move {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(region);
            }
            loader.load().await
        })
    });
    tracing::debug!(region = ?sdk_config.region(), "firehose client configured");

    Ok(FirehoseRecordSubmitter {
        firehose_client: aws_sdk_firehose::Client::new(&sdk_config),
    })
}

fn build_environment(cli: Cli) -> Result<GithubActionsEnvironment, String> {
    let mut environment = GithubActionsEnvironment::from_env();
    if let Some(stream_name) = cli.stream_name {
        environment = environment.with_input(STREAM_NAME_INPUT, stream_name);
    }
    if let Some(path) = cli.data_file {
        let data = std::fs::read_to_string(&path)
            .map_err(|error| format!("failed to read {}: {error}", path.display()))?;
        environment = environment.with_input(DATA_INPUT, data);
    }
    if let Some(data) = cli.data {
        environment = environment.with_input(DATA_INPUT, data);
    }
    if let Some(region) = cli.aws_region {
        environment = environment.with_input(AWS_REGION_INPUT, region);
    }
    Ok(environment)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let environment = match build_environment(Cli::parse()) {
        Ok(value) => value,
        Err(message) => {
            GithubActionsEnvironment::default().log(LogLevel::Error, &message);
            return ExitCode::FAILURE;
        }
    };

    match run_action(&environment, connect_firehose) {
        Ok(_) => ExitCode::SUCCESS,
        Err(message) => {
            environment.log(LogLevel::Error, &message);
            ExitCode::FAILURE
        }
    }
}
