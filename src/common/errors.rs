#[derive(thiserror::Error, Debug)]
pub enum CryptowatchError {
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CryptowatchError {
    /// True when the API rejected the request because the resource does not exist
    /// (unknown asset, exchange, market or pair symbol).
    pub fn is_not_found(&self) -> bool {
        matches!(self, CryptowatchError::ApiError { status: 404, .. })
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        CryptowatchError::MalformedResponseError(message.into())
    }
}

impl From<serde_json::Error> for CryptowatchError {
    fn from(err: serde_json::Error) -> Self {
        CryptowatchError::MalformedResponseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CryptowatchError>;
