pub mod action_environment;
pub mod record_submitter;
