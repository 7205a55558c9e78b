use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("API error: {0}")]
    ApiError(String),
}

impl HttpError {
    /// The response arrived but its body did not match the expected schema
    pub fn is_decode(&self) -> bool {
        match self {
            HttpError::JsonError(_) | HttpError::InvalidResponse(_) => true,
            HttpError::RequestFailed(err) => err.is_decode(),
            HttpError::Status { .. } | HttpError::ApiError(_) => false,
        }
    }

    /// Connection, timeout or provider-side failure
    pub fn is_transport(&self) -> bool {
        !self.is_decode()
    }
}

pub type Result<T> = std::result::Result<T, HttpError>;
