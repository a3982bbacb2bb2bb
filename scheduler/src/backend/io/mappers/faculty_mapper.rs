//! scheduler/src/backend/io/mappers/faculty_mapper.rs

use anyhow::{Context, Result};
use shared::{
    Availability as SharedAvailability, CreateFacultyRequest, Faculty as SharedFaculty,
    FacultySummary, SetAvailabilityRequest, UpdateFacultyRequest,
};
use tracing::warn;

use crate::backend::domain::commands::faculty::{
    CreateFacultyCommand, SetAvailabilityCommand, UpdateFacultyCommand,
};
use crate::backend::domain::models::{
    AvailabilityWindow, EmploymentType, Faculty as DomainFaculty,
};

/// Mapper to convert between shared Faculty DTOs and domain Faculty models.
pub struct FacultyMapper;

impl FacultyMapper {
    /// Converts a shared Faculty DTO to a domain Faculty model.
    ///
    /// Only the identity fields can reject the record. A malformed availability
    /// window is dropped on its own, and an unknown employment type falls back
    /// to the default, so the faculty member's other windows stay usable.
    pub fn to_domain(dto: SharedFaculty) -> Result<DomainFaculty> {
        let employment_type = dto.employment_type.parse::<EmploymentType>().unwrap_or_else(|e| {
            warn!("Faculty {}: {}, using {}", dto.id, e, EmploymentType::default());
            EmploymentType::default()
        });
        let availability = Self::usable_availability(&dto.id, &dto.availability);

        let mut faculty = DomainFaculty::new(&dto.id, &dto.name, &dto.email)
            .context("Invalid faculty record")?
            .with_skills(dto.skill_ids)
            .with_availability(availability);
        faculty.phone_number = dto.phone_number;
        faculty.employment_type = employment_type;
        faculty.is_active = dto.is_active;
        Ok(faculty)
    }

    /// Converts a domain Faculty model to a shared Faculty DTO.
    pub fn to_dto(domain: DomainFaculty) -> SharedFaculty {
        SharedFaculty {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            phone_number: domain.phone_number,
            employment_type: domain.employment_type.to_string(),
            is_active: domain.is_active,
            skill_ids: domain.skill_ids.into_iter().collect(),
            availability: Self::availability_to_dto(&domain.availability),
        }
    }

    pub fn to_summary_dto(domain: &DomainFaculty) -> FacultySummary {
        FacultySummary {
            id: domain.id.clone(),
            name: domain.name.clone(),
            skill_ids: domain.skill_ids.iter().cloned().collect(),
        }
    }

    /// Strict conversion for caller requests: any bad window fails the whole list
    pub fn availability_to_domain(
        dtos: Vec<SharedAvailability>,
    ) -> Result<Vec<AvailabilityWindow>> {
        dtos.iter().map(Self::window_to_domain).collect()
    }

    pub fn availability_to_dto(domain: &[AvailabilityWindow]) -> Vec<SharedAvailability> {
        domain
            .iter()
            .map(|window| SharedAvailability {
                day_of_week: window.weekday.to_string(),
                start_time: window.hours.start().to_string(),
                end_time: window.hours.end().to_string(),
            })
            .collect()
    }

    pub fn to_create_command(request: CreateFacultyRequest) -> Result<CreateFacultyCommand> {
        Ok(CreateFacultyCommand {
            employment_type: request.employment_type.parse()?,
            name: request.name,
            email: request.email,
            phone_number: request.phone_number,
            skill_ids: request.skill_ids,
        })
    }

    pub fn to_update_command(request: UpdateFacultyRequest) -> Result<UpdateFacultyCommand> {
        Ok(UpdateFacultyCommand {
            employment_type: request.employment_type.parse()?,
            id: request.id,
            name: request.name,
            email: request.email,
            phone_number: request.phone_number,
            is_active: request.is_active,
            skill_ids: request.skill_ids,
        })
    }

    pub fn to_set_availability_command(
        request: SetAvailabilityRequest,
    ) -> Result<SetAvailabilityCommand> {
        Ok(SetAvailabilityCommand {
            availability: Self::availability_to_domain(request.availability)?,
            faculty_id: request.faculty_id,
        })
    }

    fn window_to_domain(dto: &SharedAvailability) -> Result<AvailabilityWindow> {
        AvailabilityWindow::parse(&dto.day_of_week, &dto.start_time, &dto.end_time)
            .with_context(|| {
                format!(
                    "Invalid availability {} {}-{}",
                    dto.day_of_week, dto.start_time, dto.end_time
                )
            })
    }

    fn usable_availability(
        faculty_id: &str,
        dtos: &[SharedAvailability],
    ) -> Vec<AvailabilityWindow> {
        dtos.iter()
            .filter_map(|dto| match Self::window_to_domain(dto) {
                Ok(window) => Some(window),
                Err(e) => {
                    warn!("Skipping availability of faculty {}: {:#}", faculty_id, e);
                    None
                }
            })
            .collect()
    }
}
