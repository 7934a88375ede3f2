use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShellError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    /// The page is missing something the shell needs to start.
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    /// An external capability was not wired in by the hosting page.
    #[error("Missing capability: {0}")]
    MissingCapability(String),

    #[error("Logout failed: {0}")]
    Logout(String),
}

impl ShellError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        ShellError::Configuration {
            reason: reason.into(),
        }
    }

    /// Errors that must stop the shell from mounting.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShellError::Configuration { .. } | ShellError::NoWindow | ShellError::NoDocument
        )
    }
}
