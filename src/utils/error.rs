use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to make build wrapper executable at {path}: {source}")]
    PermissionError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Build command failed: {message}")]
    BuildExecutionError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LaunchError>;

impl LaunchError {
    /// Process exit code reported when this error terminates the launcher.
    /// Never zero: every launch error is terminal.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ConfigValidationError { .. }
            | LaunchError::InvalidConfigValueError { .. } => 2,
            LaunchError::PermissionError { .. } => 3,
            LaunchError::BuildExecutionError { .. } | LaunchError::IoError(_) => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LaunchError::PermissionError { path, .. } => {
                format!("Could not mark the build wrapper at '{}' executable", path)
            }
            LaunchError::BuildExecutionError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LaunchError::PermissionError { .. } => {
                "Check that the wrapper file exists in the project directory and that you own it"
            }
            LaunchError::BuildExecutionError { .. } => {
                "Inspect the build output above; re-run with --verbose for launcher diagnostics"
            }
            LaunchError::ConfigValidationError { .. }
            | LaunchError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again (see --help for flags)"
            }
            LaunchError::IoError(_) => "Check file paths and permissions, then retry",
        }
    }
}
