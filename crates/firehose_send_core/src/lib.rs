//! Firehose record submission domain primitives.
//!
//! This crate owns the request/result contract and the client-side validation
//! rules. It intentionally excludes AWS SDK and automation-runner concerns.

pub mod contract;
pub mod validation;

pub use contract::{RecordConfig, SendError, SubmissionResult};
pub use validation::{validate_data, validate_stream_name};
