//! Batch validation and maintenance.

use shared::{Batch, BatchValidationResponse, SaveBatchRequest, ValidateBatchRequest};
use tracing::info;

use super::HandlerError;
use crate::backend::io::mappers::BatchMapper;
use crate::backend::AppState;

/// Pre-flight conflict check. A conflict is a normal answer here, not an error.
pub fn validate_batch(
    state: &AppState,
    request: ValidateBatchRequest,
) -> Result<BatchValidationResponse, HandlerError> {
    info!("validate-batch - request: {:?}", request);

    let command = BatchMapper::to_validate_command(request)
        .map_err(|e| HandlerError::bad_request(e).logged("batch validation"))?;
    let conflict = state
        .roster_service
        .check_schedule(&command)
        .map_err(|e| HandlerError::from(e).logged("batch validation"))?;

    Ok(BatchMapper::to_validation_response(conflict))
}

/// Create the batch, or update it when the request carries an id
pub fn save_batch(state: &AppState, request: SaveBatchRequest) -> Result<Batch, HandlerError> {
    info!("save-batch - request: {:?}", request);

    let command = BatchMapper::to_save_command(request)
        .map_err(|e| HandlerError::bad_request(e).logged("batch save"))?;
    let saved = if command.id.is_some() {
        state.roster_service.update_batch(command)
    } else {
        state.roster_service.create_batch(command)
    };

    saved
        .map(BatchMapper::to_dto)
        .map_err(|e| HandlerError::from(e).logged("batch save"))
}

pub fn delete_batch(state: &AppState, batch_id: &str) -> Result<(), HandlerError> {
    info!("delete-batch - id: {}", batch_id);
    state
        .roster_service
        .delete_batch(batch_id)
        .map_err(|e| HandlerError::from(e).logged("batch delete"))
}

pub fn list_batches(state: &AppState) -> Result<Vec<Batch>, HandlerError> {
    let batches = state
        .roster_service
        .list_batches()
        .map_err(|e| HandlerError::from(e).logged("batch listing"))?;
    Ok(batches.into_iter().map(BatchMapper::to_dto).collect())
}
