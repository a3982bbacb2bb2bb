//! scheduler/src/backend/io/mappers/batch_mapper.rs

use anyhow::{Context, Result};
use shared::{
    Batch as SharedBatch, BatchConflict as SharedConflict, BatchScheduleRequest,
    BatchValidationResponse, ConflictKind, ConflictingBatch, SaveBatchRequest,
    ValidateBatchRequest,
};
use tracing::warn;

use crate::backend::domain::commands::batch::SaveBatchCommand;
use crate::backend::domain::commands::slots::ValidateScheduleCommand;
use crate::backend::domain::conflict_validator::BatchConflict;
use crate::backend::domain::models::{
    format_date, Batch as DomainBatch, BatchSchedule, BatchStatus,
};

/// Mapper to convert between shared Batch DTOs and domain Batch models.
pub struct BatchMapper;

impl BatchMapper {
    pub fn schedule_to_domain<S: AsRef<str>>(
        start_date: &str,
        end_date: &str,
        start_time: &str,
        end_time: &str,
        days_of_week: &[S],
    ) -> Result<BatchSchedule> {
        BatchSchedule::parse(start_date, end_date, start_time, end_time, days_of_week)
            .with_context(|| {
                format!(
                    "Invalid schedule {} to {} at {}-{}",
                    start_date, end_date, start_time, end_time
                )
            })
    }

    /// Converts a shared Batch DTO to a domain Batch model.
    ///
    /// Only an unusable id or schedule rejects the record. A stored batch keeps
    /// its faculty member busy whatever its bookkeeping fields say, so a bad
    /// name, status or capacity is replaced with a fallback instead.
    pub fn to_domain(dto: SharedBatch) -> Result<DomainBatch> {
        let schedule = Self::schedule_to_domain(
            &dto.start_date,
            &dto.end_date,
            &dto.start_time,
            &dto.end_time,
            &dto.days_of_week,
        )
        .with_context(|| format!("Invalid batch {}", dto.id))?;

        let status = dto.status.parse::<BatchStatus>().unwrap_or_else(|e| {
            warn!("Batch {}: {}, using {}", dto.id, e, BatchStatus::default());
            BatchStatus::default()
        });
        let name = if dto.name.trim().is_empty() {
            warn!("Batch {} has no name, using its id", dto.id);
            dto.id.clone()
        } else {
            dto.name
        };

        let batch = DomainBatch::new(&dto.id, &name, schedule).context("Invalid batch record")?;
        let mut batch = match batch.clone().with_max_students(dto.max_students) {
            Ok(batch) => batch,
            Err(e) => {
                warn!("Batch {}: {}, leaving capacity unset", dto.id, e);
                batch
            }
        };
        batch.description = dto.description;
        batch.faculty_id = dto.faculty_id;
        batch.skill_id = dto.skill_id;
        batch.status = status;
        batch.student_ids = dto.student_ids;
        Ok(batch)
    }

    /// Converts a domain Batch model to a shared Batch DTO.
    pub fn to_dto(domain: DomainBatch) -> SharedBatch {
        let schedule = &domain.schedule;
        SharedBatch {
            start_date: format_date(schedule.dates.start()),
            end_date: format_date(schedule.dates.end()),
            start_time: schedule.hours.start().to_string(),
            end_time: schedule.hours.end().to_string(),
            days_of_week: schedule.days.iter().map(ToString::to_string).collect(),
            id: domain.id,
            name: domain.name,
            description: domain.description,
            faculty_id: domain.faculty_id,
            skill_id: domain.skill_id,
            max_students: domain.max_students,
            status: domain.status.to_string(),
            student_ids: domain.student_ids,
        }
    }

    pub fn to_save_command(request: SaveBatchRequest) -> Result<SaveBatchCommand> {
        let schedule = Self::schedule_to_domain(
            &request.start_date,
            &request.end_date,
            &request.start_time,
            &request.end_time,
            &request.days_of_week,
        )?;

        Ok(SaveBatchCommand {
            id: request.id,
            name: request.name,
            description: request.description,
            schedule,
            faculty_id: request.faculty_id,
            skill_id: request.skill_id,
            max_students: request.max_students,
            status: request.status.parse()?,
            student_ids: request.student_ids,
        })
    }

    pub fn to_validate_command(request: ValidateBatchRequest) -> Result<ValidateScheduleCommand> {
        let BatchScheduleRequest {
            faculty_id,
            start_date,
            end_date,
            start_time,
            end_time,
            days_of_week,
        } = request.schedule;

        Ok(ValidateScheduleCommand {
            schedule: Self::schedule_to_domain(
                &start_date,
                &end_date,
                &start_time,
                &end_time,
                &days_of_week,
            )?,
            faculty_id,
            exclude_batch_id: request.exclude_batch_id,
        })
    }

    pub fn conflict_to_dto(conflict: &BatchConflict) -> SharedConflict {
        let mut dto = SharedConflict {
            kind: ConflictKind::NoAvailabilityForDay,
            day_of_week: conflict.weekday().to_string(),
            message: conflict.to_string(),
            available: None,
            requested: None,
            date: None,
            conflicting_batch: None,
        };

        match conflict {
            BatchConflict::NoAvailabilityForDay { .. } => {}
            BatchConflict::OutsideAvailableHours {
                available, requested, ..
            } => {
                dto.kind = ConflictKind::OutsideAvailableHours;
                dto.available = Some(available.to_string());
                dto.requested = Some(requested.to_string());
            }
            BatchConflict::ScheduleClash { date, batch, .. } => {
                dto.kind = ConflictKind::ScheduleClash;
                dto.date = Some(format_date(*date));
                dto.conflicting_batch = Some(ConflictingBatch {
                    id: batch.id.clone(),
                    name: batch.name.clone(),
                    start_date: format_date(batch.dates.start()),
                    end_date: format_date(batch.dates.end()),
                    start_time: batch.hours.start().to_string(),
                    end_time: batch.hours.end().to_string(),
                });
            }
        }
        dto
    }

    pub fn to_validation_response(conflict: Option<BatchConflict>) -> BatchValidationResponse {
        BatchValidationResponse {
            valid: conflict.is_none(),
            conflict: conflict.as_ref().map(Self::conflict_to_dto),
        }
    }
}
