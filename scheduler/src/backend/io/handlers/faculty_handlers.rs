//! Faculty and availability maintenance.

use shared::{
    Availability, CreateFacultyRequest, Faculty, SetAvailabilityRequest, UpdateFacultyRequest,
};
use tracing::info;

use super::HandlerError;
use crate::backend::io::mappers::FacultyMapper;
use crate::backend::AppState;

pub fn create_faculty(
    state: &AppState,
    request: CreateFacultyRequest,
) -> Result<Faculty, HandlerError> {
    info!("create-faculty - request: {:?}", request);

    let command = FacultyMapper::to_create_command(request)
        .map_err(|e| HandlerError::bad_request(e).logged("faculty create"))?;
    state
        .roster_service
        .create_faculty(command)
        .map(FacultyMapper::to_dto)
        .map_err(|e| HandlerError::from(e).logged("faculty create"))
}

pub fn update_faculty(
    state: &AppState,
    request: UpdateFacultyRequest,
) -> Result<Faculty, HandlerError> {
    info!("update-faculty - request: {:?}", request);

    let command = FacultyMapper::to_update_command(request)
        .map_err(|e| HandlerError::bad_request(e).logged("faculty update"))?;
    state
        .roster_service
        .update_faculty(command)
        .map(FacultyMapper::to_dto)
        .map_err(|e| HandlerError::from(e).logged("faculty update"))
}

pub fn delete_faculty(state: &AppState, faculty_id: &str) -> Result<(), HandlerError> {
    info!("delete-faculty - id: {}", faculty_id);
    state
        .roster_service
        .delete_faculty(faculty_id)
        .map_err(|e| HandlerError::from(e).logged("faculty delete"))
}

pub fn get_faculty(state: &AppState, faculty_id: &str) -> Result<Faculty, HandlerError> {
    state
        .roster_service
        .get_faculty(faculty_id)
        .map(FacultyMapper::to_dto)
        .map_err(|e| HandlerError::from(e).logged("faculty lookup"))
}

pub fn list_faculty(state: &AppState) -> Result<Vec<Faculty>, HandlerError> {
    let faculty = state
        .roster_service
        .list_faculty()
        .map_err(|e| HandlerError::from(e).logged("faculty listing"))?;
    Ok(faculty.into_iter().map(FacultyMapper::to_dto).collect())
}

/// Replace all availability windows of one faculty member
pub fn set_availability(
    state: &AppState,
    request: SetAvailabilityRequest,
) -> Result<Faculty, HandlerError> {
    info!("set-availability - request: {:?}", request);

    let command = FacultyMapper::to_set_availability_command(request)
        .map_err(|e| HandlerError::bad_request(e).logged("availability update"))?;
    state
        .roster_service
        .set_availability(command)
        .map(FacultyMapper::to_dto)
        .map_err(|e| HandlerError::from(e).logged("availability update"))
}

pub fn get_availability(
    state: &AppState,
    faculty_id: &str,
) -> Result<Vec<Availability>, HandlerError> {
    let windows = state
        .roster_service
        .get_availability(faculty_id)
        .map_err(|e| HandlerError::from(e).logged("availability lookup"))?;
    Ok(FacultyMapper::availability_to_dto(&windows))
}
