//! Service-level errors.

use assess_core::{RespondentId, TeamCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] assess_core::Error),

    #[error("Unknown team: {0}")]
    UnknownTeam(TeamCode),

    #[error("Respondent {respondent} is not a member of team {team}")]
    NotAMember { team: TeamCode, respondent: RespondentId },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl ServiceError {
    /// Whether the caller sent bad input (as opposed to a server-side fault)
    pub fn is_client_error(&self) -> bool {
        match self {
            ServiceError::Engine(e) => e.is_validation() || e.is_configuration(),
            ServiceError::UnknownTeam(_) | ServiceError::NotAMember { .. } => true,
            ServiceError::Config(_) | ServiceError::Telemetry(_) => false,
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
