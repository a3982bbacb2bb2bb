//! Free-slot search.

use shared::{FreeSlotsRequest, FreeSlotsResponse};
use tracing::info;

use super::HandlerError;
use crate::backend::io::mappers::SlotMapper;
use crate::backend::AppState;

/// Free windows per faculty member and date for the requested range
pub fn free_slots(
    state: &AppState,
    request: FreeSlotsRequest,
) -> Result<FreeSlotsResponse, HandlerError> {
    info!("free-slots - request: {:?}", request);

    let query = SlotMapper::to_query(request)
        .map_err(|e| HandlerError::bad_request(e).logged("free-slot search"))?;
    let roster = state
        .roster_service
        .snapshot()
        .map_err(|e| HandlerError::from(e).logged("free-slot search"))?;

    let results = state
        .free_slot_service
        .find_free_slots(&roster.faculty, &roster.batches, &query)
        .map_err(|e| HandlerError::BadRequest(e.to_string()).logged("free-slot search"))?;

    Ok(SlotMapper::to_response(results))
}
