use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error: status {status_code}")]
    Server { status_code: u16 },

    #[error("Decoding error: {0}")]
    Decoding(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Server { status_code } => Some(*status_code),
            _ => None,
        }
    }
}
