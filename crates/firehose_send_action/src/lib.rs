//! GitHub Actions and AWS-facing adapters for single-record Firehose submission.
//!
//! This crate owns the runner integration (named inputs, outputs, workflow
//! commands) and the submission handlers. Validation rules and the result
//! contract live in `firehose_send_core`.

pub mod adapters;
pub mod handlers;
pub mod observe;
