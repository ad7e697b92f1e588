use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileTransformError {
    #[error("File not found: {}", path.display())]
    NotFoundError { path: PathBuf },

    #[error("IO error on '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Transformation failed on line {line_number}: {message}")]
    TransformFailed { line_number: usize, message: String },

    #[error("Unexpected error: {message}")]
    UnexpectedError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No valid answer after {attempts} attempts")]
    PromptAttemptsExhausted { attempts: usize },

    #[error("Prompt input was closed before an answer was given")]
    PromptInputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    MissingFile,
    Io,
    Transform,
    Unexpected,
    Configuration,
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FileTransformError {
    /// 依據 io::Error 的種類決定是「找不到檔案」還是一般 IO 錯誤
    pub fn from_io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFoundError { path },
            _ => Self::IoError { path, source },
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFoundError { .. } => ErrorCategory::MissingFile,
            Self::IoError { .. } => ErrorCategory::Io,
            Self::TransformFailed { .. } => ErrorCategory::Transform,
            Self::UnexpectedError { .. } => ErrorCategory::Unexpected,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::PromptAttemptsExhausted { .. } | Self::PromptInputClosed => {
                ErrorCategory::Prompt
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::MissingFile | ErrorCategory::Prompt => ErrorSeverity::Medium,
            ErrorCategory::Transform | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Unexpected => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFoundError { path } => format!(
                "Error: The file '{}' was not found. Please check the filename and try again.",
                path.display()
            ),
            Self::IoError { source, .. } => {
                format!("Error: Could not read or write file. Details: {}", source)
            }
            Self::TransformFailed {
                line_number,
                message,
            } => format!(
                "Error: The transformation rejected line {}. Details: {}",
                line_number, message
            ),
            Self::UnexpectedError { message } => {
                format!("An unexpected error occurred: {}", message)
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            Self::PromptAttemptsExhausted { .. } | Self::PromptInputClosed => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::MissingFile => {
                "Make sure the file exists and the path is spelled correctly"
            }
            ErrorCategory::Io => "Check file permissions and free disk space",
            ErrorCategory::Transform => "Inspect the reported line in the input file",
            ErrorCategory::Unexpected => {
                "Check that the input is UTF-8 text and try again with --verbose"
            }
            ErrorCategory::Configuration => "Fix the configuration file and run again",
            ErrorCategory::Prompt => "Run the program again and enter an existing file path",
        }
    }
}

pub type Result<T> = std::result::Result<T, FileTransformError>;
