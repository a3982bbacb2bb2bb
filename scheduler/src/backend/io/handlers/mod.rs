//! # Request Handlers
//!
//! One function per roster operation. Each takes the application state and a
//! shared request DTO, converts it with the mappers, calls the domain and maps
//! the outcome back to a DTO or a [`HandlerError`].
//!
//! Errors carry a status class the way a REST layer would report them:
//! unparseable or invalid input is a bad request, unknown ids are not found,
//! and a batch rejected by the conflict check is a conflict carrying the
//! structured explanation.

pub mod batch_handlers;
pub mod catalog_handlers;
pub mod faculty_handlers;
pub mod slot_handlers;

use shared::BatchConflict as SharedConflict;
use tracing::{error, warn};

use crate::backend::domain::roster_service::RosterError;
use crate::backend::io::mappers::BatchMapper;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{}", .0.message)]
    Conflict(SharedConflict),
    #[error("{0}")]
    Internal(String),
}

impl HandlerError {
    /// HTTP-equivalent status code of this error class
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::BadRequest(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::Conflict(_) => 409,
            HandlerError::Internal(_) => 500,
        }
    }

    pub(crate) fn bad_request(err: anyhow::Error) -> Self {
        HandlerError::BadRequest(format!("{:#}", err))
    }

    pub(crate) fn logged(self, action: &str) -> Self {
        match &self {
            HandlerError::Internal(_) => error!("Failed to {}: {}", action, self),
            _ => warn!("Rejected {}: {}", action, self),
        }
        self
    }
}

impl From<RosterError> for HandlerError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::NotFound { .. } => HandlerError::NotFound(err.to_string()),
            RosterError::DuplicateAvailabilityDay(_) | RosterError::Invalid(_) => {
                HandlerError::BadRequest(err.to_string())
            }
            RosterError::Conflict(conflict) => {
                HandlerError::Conflict(BatchMapper::conflict_to_dto(&conflict))
            }
            RosterError::Storage(e) => HandlerError::Internal(format!("{:#}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::conflict_validator::BatchConflict;
    use crate::backend::domain::models::{DayOfWeek, ModelError};
    use anyhow::anyhow;

    #[test]
    fn test_roster_errors_map_to_status_classes() {
        let not_found = HandlerError::from(RosterError::NotFound {
            kind: "Faculty",
            id: "f9".to_string(),
        });
        assert_eq!(not_found.status_code(), 404);
        assert_eq!(not_found.to_string(), "Faculty f9 not found");

        let invalid =
            HandlerError::from(RosterError::Invalid(ModelError::EmptyField("Batch name")));
        assert_eq!(invalid.status_code(), 400);

        let storage = HandlerError::from(RosterError::Storage(anyhow!("Roster lock poisoned")));
        assert_eq!(storage.status_code(), 500);
    }

    #[test]
    fn test_conflict_keeps_message() {
        let err = HandlerError::from(RosterError::Conflict(BatchConflict::NoAvailabilityForDay {
            faculty_name: "Asha".to_string(),
            weekday: DayOfWeek::Friday,
        }));

        assert_eq!(err.status_code(), 409);
        assert_eq!(err.to_string(), "Faculty Asha is not available on Friday.");
        match err {
            HandlerError::Conflict(dto) => assert_eq!(dto.day_of_week, "Friday"),
            other => panic!("expected conflict, got {:?}", other),
        }
    }
}
