//! Skills and students.

use shared::{CreateSkillRequest, SaveStudentRequest, Skill, Student};
use tracing::info;

use super::HandlerError;
use crate::backend::io::mappers::CatalogMapper;
use crate::backend::AppState;

pub fn create_skill(state: &AppState, request: CreateSkillRequest) -> Result<Skill, HandlerError> {
    info!("create-skill - request: {:?}", request);
    state
        .roster_service
        .create_skill(CatalogMapper::to_create_skill_command(request))
        .map(CatalogMapper::skill_to_dto)
        .map_err(|e| HandlerError::from(e).logged("skill create"))
}

pub fn list_skills(state: &AppState) -> Result<Vec<Skill>, HandlerError> {
    let skills = state
        .roster_service
        .list_skills()
        .map_err(|e| HandlerError::from(e).logged("skill listing"))?;
    Ok(skills.into_iter().map(CatalogMapper::skill_to_dto).collect())
}

/// Create the student, or update it when the request carries an id
pub fn save_student(
    state: &AppState,
    request: SaveStudentRequest,
) -> Result<Student, HandlerError> {
    info!("save-student - request: {:?}", request);

    let command = CatalogMapper::to_save_student_command(request);
    let saved = if command.id.is_some() {
        state.roster_service.update_student(command)
    } else {
        state.roster_service.create_student(command)
    };

    saved
        .map(CatalogMapper::student_to_dto)
        .map_err(|e| HandlerError::from(e).logged("student save"))
}

pub fn delete_student(state: &AppState, student_id: &str) -> Result<(), HandlerError> {
    info!("delete-student - id: {}", student_id);
    state
        .roster_service
        .delete_student(student_id)
        .map_err(|e| HandlerError::from(e).logged("student delete"))
}

pub fn list_students(state: &AppState) -> Result<Vec<Student>, HandlerError> {
    let students = state
        .roster_service
        .list_students()
        .map_err(|e| HandlerError::from(e).logged("student listing"))?;
    Ok(students.into_iter().map(CatalogMapper::student_to_dto).collect())
}
