//! Roster maintenance: skills, faculty, availability, batches and students.
//!
//! Every batch create or update goes through [`validate_schedule`] here, so a
//! stored batch never contradicts its faculty member's availability or other
//! batches (as far as a single writer can guarantee).

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};

use crate::backend::domain::commands::batch::SaveBatchCommand;
use crate::backend::domain::commands::catalog::{CreateSkillCommand, SaveStudentCommand};
use crate::backend::domain::commands::faculty::{
    CreateFacultyCommand, SetAvailabilityCommand, UpdateFacultyCommand,
};
use crate::backend::domain::commands::slots::ValidateScheduleCommand;
use crate::backend::domain::conflict_validator::{validate_schedule, BatchConflict};
use crate::backend::domain::models::{
    AvailabilityWindow, Batch, DayOfWeek, Faculty, ModelError, Roster, Skill, Student,
};
use crate::backend::storage::RosterStorage;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("Availability for {0} is listed more than once")]
    DuplicateAvailabilityDay(DayOfWeek),
    #[error(transparent)]
    Conflict(#[from] BatchConflict),
    #[error(transparent)]
    Invalid(#[from] ModelError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl RosterError {
    fn not_found(kind: &'static str, id: &str) -> Self {
        RosterError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub struct RosterService<S: RosterStorage> {
    storage: Arc<S>,
}

impl<S: RosterStorage> Clone for RosterService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: RosterStorage> RosterService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Full roster copy for the free-slot resolver
    pub fn snapshot(&self) -> Result<Roster, RosterError> {
        Ok(self.storage.snapshot()?)
    }

    // Skills

    pub fn create_skill(&self, command: CreateSkillCommand) -> Result<Skill, RosterError> {
        let mut skill = Skill::new(&Skill::generate_id(), &command.name, &command.category)?;
        skill.description = non_blank(command.description);

        self.storage.store_skill(&skill)?;
        info!("Created skill {} ({})", skill.name, skill.id);
        Ok(skill)
    }

    pub fn list_skills(&self) -> Result<Vec<Skill>, RosterError> {
        Ok(self.storage.list_skills()?)
    }

    // Faculty

    pub fn create_faculty(&self, command: CreateFacultyCommand) -> Result<Faculty, RosterError> {
        self.require_skills(&command.skill_ids)?;

        let mut faculty = Faculty::new(&Faculty::generate_id(), &command.name, &command.email)?
            .with_skills(command.skill_ids);
        faculty.phone_number = non_blank(command.phone_number);
        faculty.employment_type = command.employment_type;

        self.storage.store_faculty(&faculty)?;
        info!("Created faculty {} ({})", faculty.name, faculty.id);
        Ok(faculty)
    }

    /// Replace a faculty member's details and skill set. Availability is kept.
    pub fn update_faculty(&self, command: UpdateFacultyCommand) -> Result<Faculty, RosterError> {
        let existing = self.get_faculty(&command.id)?;
        self.require_skills(&command.skill_ids)?;

        let mut faculty = Faculty::new(&existing.id, &command.name, &command.email)?
            .with_skills(command.skill_ids)
            .with_availability(existing.availability);
        faculty.phone_number = non_blank(command.phone_number);
        faculty.employment_type = command.employment_type;
        faculty.is_active = command.is_active;

        self.storage.store_faculty(&faculty)?;
        info!("Updated faculty {} ({})", faculty.name, faculty.id);
        Ok(faculty)
    }

    /// Remove a faculty member. Their batches stay but become unassigned.
    pub fn delete_faculty(&self, faculty_id: &str) -> Result<(), RosterError> {
        if !self.storage.delete_faculty(faculty_id)? {
            warn!("Cannot delete unknown faculty {}", faculty_id);
            return Err(RosterError::not_found("Faculty", faculty_id));
        }

        let mut unassigned = 0;
        for mut batch in self.storage.list_batches()? {
            if batch.faculty_id.as_deref() == Some(faculty_id) {
                batch.faculty_id = None;
                self.storage.store_batch(&batch)?;
                unassigned += 1;
            }
        }

        info!("Deleted faculty {} and unassigned {} batches", faculty_id, unassigned);
        Ok(())
    }

    pub fn list_faculty(&self) -> Result<Vec<Faculty>, RosterError> {
        Ok(self.storage.list_faculty()?)
    }

    pub fn get_faculty(&self, faculty_id: &str) -> Result<Faculty, RosterError> {
        self.storage
            .get_faculty(faculty_id)?
            .ok_or_else(|| RosterError::not_found("Faculty", faculty_id))
    }

    // Availability

    /// Replace all availability windows of a faculty member.
    ///
    /// Each weekday may appear at most once; an empty list clears availability.
    pub fn set_availability(
        &self,
        command: SetAvailabilityCommand,
    ) -> Result<Faculty, RosterError> {
        let mut faculty = self.get_faculty(&command.faculty_id)?;

        let mut seen = BTreeSet::new();
        if let Some(window) = command.availability.iter().find(|w| !seen.insert(w.weekday)) {
            warn!(
                "Rejected availability for {}: {} listed twice",
                faculty.name, window.weekday
            );
            return Err(RosterError::DuplicateAvailabilityDay(window.weekday));
        }

        faculty.availability = command.availability;
        self.storage.store_faculty(&faculty)?;
        info!(
            "Set {} availability windows for {}",
            faculty.availability.len(),
            faculty.name
        );
        Ok(faculty)
    }

    pub fn get_availability(
        &self,
        faculty_id: &str,
    ) -> Result<Vec<AvailabilityWindow>, RosterError> {
        Ok(self.get_faculty(faculty_id)?.availability)
    }

    // Batches

    /// Run the conflict check for a proposed schedule without storing anything.
    ///
    /// Returns `Ok(None)` when the schedule is acceptable. Proposals without a
    /// faculty member or without any weekday are not checked.
    pub fn check_schedule(
        &self,
        command: &ValidateScheduleCommand,
    ) -> Result<Option<BatchConflict>, RosterError> {
        let Some(faculty_id) = command.faculty_id.as_deref() else {
            return Ok(None);
        };
        if command.schedule.days.is_empty() {
            return Ok(None);
        }

        let faculty = self.get_faculty(faculty_id)?;
        let batches = self.storage.list_batches()?;
        let outcome = validate_schedule(
            &command.schedule,
            &faculty,
            &batches,
            command.exclude_batch_id.as_deref(),
        );
        Ok(outcome.err())
    }

    pub fn create_batch(&self, command: SaveBatchCommand) -> Result<Batch, RosterError> {
        let batch = self.build_batch(Batch::generate_id(), command)?;
        self.enforce_schedule(&batch, None)?;

        self.storage.store_batch(&batch)?;
        info!("Created batch {} ({})", batch.name, batch.id);
        Ok(batch)
    }

    /// Update the batch named by `command.id`, which is excluded from its own
    /// clash check.
    pub fn update_batch(&self, command: SaveBatchCommand) -> Result<Batch, RosterError> {
        let id = command
            .id
            .clone()
            .ok_or(ModelError::EmptyField("Batch id"))?;
        if self.storage.get_batch(&id)?.is_none() {
            warn!("Cannot update unknown batch {}", id);
            return Err(RosterError::not_found("Batch", &id));
        }

        let batch = self.build_batch(id, command)?;
        self.enforce_schedule(&batch, Some(&batch.id))?;

        self.storage.store_batch(&batch)?;
        info!("Updated batch {} ({})", batch.name, batch.id);
        Ok(batch)
    }

    pub fn delete_batch(&self, batch_id: &str) -> Result<(), RosterError> {
        if !self.storage.delete_batch(batch_id)? {
            warn!("Cannot delete unknown batch {}", batch_id);
            return Err(RosterError::not_found("Batch", batch_id));
        }
        info!("Deleted batch {}", batch_id);
        Ok(())
    }

    pub fn list_batches(&self) -> Result<Vec<Batch>, RosterError> {
        Ok(self.storage.list_batches()?)
    }

    fn build_batch(&self, id: String, command: SaveBatchCommand) -> Result<Batch, RosterError> {
        let roster = self.storage.snapshot()?;

        if let Some(faculty_id) = command.faculty_id.as_deref() {
            if roster.find_faculty(faculty_id).is_none() {
                return Err(RosterError::not_found("Faculty", faculty_id));
            }
        }
        if let Some(skill_id) = command.skill_id.as_deref() {
            if !roster.has_skill(skill_id) {
                return Err(RosterError::not_found("Skill", skill_id));
            }
        }
        if let Some(student_id) = command.student_ids.iter().find(|id| !roster.has_student(id)) {
            return Err(RosterError::not_found("Student", student_id));
        }

        let mut batch = Batch::new(&id, &command.name, command.schedule)?
            .with_max_students(command.max_students)?;
        batch.description = non_blank(command.description);
        batch.faculty_id = command.faculty_id;
        batch.skill_id = command.skill_id;
        batch.status = command.status;
        batch.student_ids = dedup_preserving_order(command.student_ids);
        Ok(batch)
    }

    fn enforce_schedule(
        &self,
        batch: &Batch,
        exclude_batch_id: Option<&str>,
    ) -> Result<(), RosterError> {
        let command = ValidateScheduleCommand {
            faculty_id: batch.faculty_id.clone(),
            schedule: batch.schedule.clone(),
            exclude_batch_id: exclude_batch_id.map(str::to_string),
        };

        match self.check_schedule(&command)? {
            None => Ok(()),
            Some(conflict) => {
                warn!("Rejected batch {}: {}", batch.name, conflict);
                Err(conflict.into())
            }
        }
    }

    // Students

    pub fn create_student(&self, command: SaveStudentCommand) -> Result<Student, RosterError> {
        let student = build_student(&Student::generate_id(), command)?;
        self.storage.store_student(&student)?;
        info!("Created student {} ({})", student.name, student.id);
        Ok(student)
    }

    pub fn update_student(&self, command: SaveStudentCommand) -> Result<Student, RosterError> {
        let id = command
            .id
            .clone()
            .ok_or(ModelError::EmptyField("Student id"))?;
        if self.storage.get_student(&id)?.is_none() {
            return Err(RosterError::not_found("Student", &id));
        }

        let student = build_student(&id, command)?;
        self.storage.store_student(&student)?;
        info!("Updated student {} ({})", student.name, student.id);
        Ok(student)
    }

    /// Remove a student and drop them from every batch they were enrolled in
    pub fn delete_student(&self, student_id: &str) -> Result<(), RosterError> {
        if !self.storage.delete_student(student_id)? {
            warn!("Cannot delete unknown student {}", student_id);
            return Err(RosterError::not_found("Student", student_id));
        }

        for mut batch in self.storage.list_batches()? {
            let before = batch.student_ids.len();
            batch.student_ids.retain(|id| id != student_id);
            if batch.student_ids.len() != before {
                self.storage.store_batch(&batch)?;
            }
        }

        info!("Deleted student {}", student_id);
        Ok(())
    }

    pub fn list_students(&self) -> Result<Vec<Student>, RosterError> {
        Ok(self.storage.list_students()?)
    }

    fn require_skills(&self, skill_ids: &[String]) -> Result<(), RosterError> {
        let known = self.storage.list_skills()?;
        match skill_ids.iter().find(|id| !known.iter().any(|skill| &skill.id == *id)) {
            Some(unknown) => Err(RosterError::not_found("Skill", unknown)),
            None => Ok(()),
        }
    }
}

fn build_student(id: &str, command: SaveStudentCommand) -> Result<Student, ModelError> {
    let mut student = Student::new(id, &command.name, &command.admission_number)?;
    student.phone_number = non_blank(command.phone_number);
    Ok(student)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
