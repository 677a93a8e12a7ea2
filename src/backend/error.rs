//! Backend call failures

/// Why a backend call did not produce a usable response.
///
/// Kept `Clone` so it can travel inside iced messages, which is why the
/// underlying reqwest error is flattened to its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(String),

    #[error("backend returned HTTP {0}")]
    Status(u16),

    #[error("malformed backend response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Non-2xx answers are the only failures where the backend was reached
    pub fn is_rejection(&self) -> bool {
        matches!(self, BackendError::Status(_))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::Status(status.as_u16())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}
