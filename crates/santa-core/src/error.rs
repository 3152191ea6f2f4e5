use thiserror::Error;

#[derive(Debug, Error)]
pub enum SantaError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("at least 2 participants are required, got {0}")]
    TooFewParticipants(usize),

    #[error("participant #{0} has an empty name")]
    EmptyName(usize),

    #[error("participant '{0}' has no phone number")]
    MissingPhone(String),

    #[error("duplicate participant name: {0}")]
    DuplicateName(String),

    #[error("the draw has not been run yet")]
    NotInitialized,

    #[error("assignments are not ready yet")]
    AssignmentsNotReady,

    #[error("link not found: {0}")]
    LinkNotFound(String),

    #[error("no assignment recorded for giver {0}")]
    AssignmentMissing(String),

    #[error("persisted token does not match any configured participant: {0}")]
    DataIntegrity(String),

    #[error("notification failed: {0}")]
    Notification(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SantaError>;
