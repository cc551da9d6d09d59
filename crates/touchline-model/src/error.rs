use thiserror::Error;

/// Errors produced while constructing model values.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid team id: {0:?}")]
    InvalidTeamId(String),
    #[error("invalid player id: {0:?}")]
    InvalidPlayerId(String),
}
