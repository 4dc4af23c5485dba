use thiserror::Error;

/// Failure of a request against the battle API.
///
/// `Display` is the message shown to users, so keep it readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Battle not found")]
    NotFound,
    #[error("The battle server responded with status {0}")]
    Status(u16),
    #[error("Could not reach the battle server: {0}")]
    Network(String),
    #[error("Could not read the battle data: {0}")]
    Decode(String),
}

impl FetchError {
    /// Map a non-success HTTP status onto an error.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            other => Self::Status(other),
        }
    }
}
