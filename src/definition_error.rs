use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationDefinitionError {
    #[error("Notification definition resource [{0}] does not exist")]
    ResourceMissing(String),
    #[error("Malformed notification definitions: {0}")]
    MalformedConfig(String),
    #[error("Error reading notification definitions: {0}")]
    Io(#[from] std::io::Error),
}

impl NotificationDefinitionError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedConfig(reason.into())
    }

    /// Recognized failures are cached as permanent by the registry, anything else is retried.
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::ResourceMissing(_) | Self::MalformedConfig(_))
    }
}

impl From<json5::Error> for NotificationDefinitionError {
    fn from(err: json5::Error) -> Self {
        Self::MalformedConfig(err.to_string())
    }
}

impl From<serde_yml::Error> for NotificationDefinitionError {
    fn from(err: serde_yml::Error) -> Self {
        Self::MalformedConfig(err.to_string())
    }
}
