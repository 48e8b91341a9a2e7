use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Unable to retrieve local IP addresses")]
    NoAddresses,

    #[error("No address reporting command could be executed")]
    CommandsUnavailable,

    #[error("Address reporting command failed: {0}")]
    CommandFailed(String),

    #[error("Interface enumeration failed: {0}")]
    Enumeration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IdentityError {
    /// True for the errors that abort an invocation because no address list
    /// could be produced.
    pub fn is_enumeration_failure(&self) -> bool {
        matches!(
            self,
            IdentityError::NoAddresses
                | IdentityError::CommandsUnavailable
                | IdentityError::CommandFailed(_)
                | IdentityError::Enumeration(_)
        )
    }
}
