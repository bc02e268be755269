use tracing_subscriber::EnvFilter;

/// Initializes a stderr `tracing_subscriber` using `FIREHOSE_SEND_LOG` first, then
/// `RUST_LOG`, then `warn`.
///
/// Stdout is reserved for workflow commands, so diagnostics (including the AWS
/// SDK's own spans) never interleave with `::error::` and friends.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("FIREHOSE_SEND_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
