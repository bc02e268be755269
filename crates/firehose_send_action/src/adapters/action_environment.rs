use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use firehose_send_core::SendError;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// Named inputs, named outputs and log lines of the hosting automation runner.
pub trait ActionEnvironment {
    fn get_input(&self, name: &str, required: bool) -> Result<String, SendError>;
    fn set_output(&self, name: &str, value: &str) -> Result<(), String>;
    fn log(&self, level: LogLevel, message: &str);
}

/// Runner environment following the GitHub Actions conventions.
///
/// Inputs come from `INPUT_<NAME>` variables unless overridden (the CLI uses
/// overrides when run outside a workflow). Outputs go to the `GITHUB_OUTPUT`
/// file when one is configured.
#[derive(Debug, Clone, Default)]
pub struct GithubActionsEnvironment {
    overrides: BTreeMap<String, String>,
    output_path: Option<PathBuf>,
}

impl GithubActionsEnvironment {
    pub fn from_env() -> Self {
        let output_path = std::env::var_os("GITHUB_OUTPUT")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            overrides: BTreeMap::new(),
            output_path,
        }
    }

    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    fn raw_input(&self, name: &str) -> Option<String> {
        self.overrides
            .get(name)
            .cloned()
            .or_else(|| std::env::var(input_env_key(name)).ok())
    }
}

impl ActionEnvironment for GithubActionsEnvironment {
    fn get_input(&self, name: &str, required: bool) -> Result<String, SendError> {
        let value = self
            .raw_input(name)
            .map(|value| value.trim().to_string())
            .unwrap_or_default();
        if required && value.is_empty() {
            return Err(SendError::MissingRequiredInput(name.to_string()));
        }
        Ok(value)
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), String> {
        let Some(path) = &self.output_path else {
            println!("::set-output name={}::{}", escape_property(name), escape_data(value));
            return Ok(());
        };

        let block = output_file_block(name, value, &format!("ghadelimiter_{}", Uuid::new_v4()))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| format!("failed to open {}: {error}", path.display()))?;
        file.write_all(block.as_bytes())
            .map_err(|error| format!("failed to write output '{name}': {error}"))
    }

    fn log(&self, level: LogLevel, message: &str) {
        println!("{}", workflow_log_line(level, message));
    }
}

/// `stream-name` maps to `INPUT_STREAM-NAME`; spaces become underscores.
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

pub fn workflow_log_line(level: LogLevel, message: &str) -> String {
    match level {
        LogLevel::Info => message.to_string(),
        LogLevel::Debug => format!("::debug::{}", escape_data(message)),
        LogLevel::Warning => format!("::warning::{}", escape_data(message)),
        LogLevel::Error => format!("::error::{}", escape_data(message)),
    }
}

pub fn output_file_block(name: &str, value: &str, delimiter: &str) -> Result<String, String> {
    if name.contains(delimiter) {
        return Err(format!(
            "Unexpected input: name should not contain the delimiter \"{delimiter}\""
        ));
    }
    if value.contains(delimiter) {
        return Err(format!(
            "Unexpected input: value should not contain the delimiter \"{delimiter}\""
        ));
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
