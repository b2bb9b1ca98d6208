use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Project not found: {id}")]
    NotFound { id: String },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Remote error ({status}): {message}")]
    RemoteError { status: u16, message: String },

    #[error("{message}")]
    NetworkError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Validation,
    Remote,
    Network,
    Data,
    Configuration,
}

impl PortfolioError {
    pub fn network() -> Self {
        PortfolioError::NetworkError {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn validation(field: &str, message: &str) -> Self {
        PortfolioError::ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::NotFound { .. } => ErrorCategory::NotFound,
            PortfolioError::ValidationError { .. } => ErrorCategory::Validation,
            PortfolioError::RemoteError { .. } => ErrorCategory::Remote,
            PortfolioError::NetworkError { .. } => ErrorCategory::Network,
            PortfolioError::SerializationError(_) | PortfolioError::IoError(_) => {
                ErrorCategory::Data
            }
            PortfolioError::ConfigError { .. }
            | PortfolioError::MissingConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Transient failures worth another attempt: no response, or a 5xx.
    pub fn is_retryable(&self) -> bool {
        match self {
            PortfolioError::NetworkError { .. } => true,
            PortfolioError::RemoteError { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Message shown on the page, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::NotFound { .. } => "Project not found".to_string(),
            PortfolioError::ValidationError { message, .. } => message.clone(),
            PortfolioError::RemoteError { message, .. } => message.clone(),
            PortfolioError::NetworkError { message } => message.clone(),
            PortfolioError::SerializationError(_) => {
                "The server sent a response that could not be read".to_string()
            }
            PortfolioError::IoError(_) => "An unexpected error occurred".to_string(),
            PortfolioError::ConfigError { .. }
            | PortfolioError::MissingConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => {
                "The site is not configured correctly".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Browse the portfolio to find another project",
            ErrorCategory::Validation => "Fill in the required fields and submit again",
            ErrorCategory::Remote => "Try again in a moment",
            ErrorCategory::Network => "Check your connection and retry",
            ErrorCategory::Data => "Reload the page; if it persists, report it",
            ErrorCategory::Configuration => {
                "Set PORTFOLIO_BACKEND_URL or switch the content source to static"
            }
        }
    }
}

impl From<reqwest::Error> for PortfolioError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return PortfolioError::RemoteError {
                status: err.status().map(|s| s.as_u16()).unwrap_or(200),
                message: format!("Malformed response: {}", err),
            };
        }
        tracing::debug!("request failed without a usable response: {}", err);
        PortfolioError::network()
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
