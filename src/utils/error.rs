use crate::utils::display::message_text;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    /// 伺服器回傳的錯誤內容，原封不動交給呼叫端
    #[error("Remote service returned {status}: {body}")]
    RemoteError {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Credential unavailable: {message}")]
    CredentialError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Configuration,
    Validation,
    Storage,
    Internal,
}

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::ApiError(_)
            | GatewayError::NetworkError { .. }
            | GatewayError::CredentialError { .. } => ErrorCategory::Network,
            GatewayError::RemoteError { .. } => ErrorCategory::Remote,
            GatewayError::ConfigError { .. }
            | GatewayError::ConfigValidationError { .. }
            | GatewayError::InvalidConfigValueError { .. }
            | GatewayError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GatewayError::ValidationError { .. } => ErrorCategory::Validation,
            GatewayError::IoError(_) | GatewayError::StorageError { .. } => {
                ErrorCategory::Storage
            }
            GatewayError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    /// 給畫面顯示用的訊息；伺服器錯誤優先使用 body 裡的 `message`
    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::RemoteError { body, .. } => body
                .get("message")
                .and_then(message_text)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            GatewayError::NetworkError { message } => message.clone(),
            GatewayError::ValidationError { message } => message.clone(),
            GatewayError::CredentialError { .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
