use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("{0} '{1}' not found")]
    NotFound(&'static str, String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;

impl RosterError {
    pub fn team_not_found(id: &str) -> Self {
        RosterError::NotFound("Team", id.to_string())
    }

    pub fn member_not_found(id: &str) -> Self {
        RosterError::NotFound("Member", id.to_string())
    }
}
