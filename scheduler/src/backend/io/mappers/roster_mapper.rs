//! scheduler/src/backend/io/mappers/roster_mapper.rs

use anyhow::Result;
use shared::RosterSnapshot;
use tracing::warn;

use crate::backend::domain::models::Roster;
use crate::backend::io::mappers::batch_mapper::BatchMapper;
use crate::backend::io::mappers::catalog_mapper::CatalogMapper;
use crate::backend::io::mappers::faculty_mapper::FacultyMapper;

/// Mapper between a whole roster snapshot DTO and the domain roster.
pub struct RosterMapper;

impl RosterMapper {
    /// Convert every record that passes validation. Malformed records are
    /// logged and left out; they never abort the rest of the snapshot.
    pub fn to_domain(dto: RosterSnapshot) -> Roster {
        Roster {
            skills: keep_valid("skill", dto.skills, CatalogMapper::skill_to_domain),
            faculty: keep_valid("faculty", dto.faculty, FacultyMapper::to_domain),
            batches: keep_valid("batch", dto.batches, BatchMapper::to_domain),
            students: keep_valid("student", dto.students, CatalogMapper::student_to_domain),
        }
    }

    pub fn to_dto(domain: Roster) -> RosterSnapshot {
        RosterSnapshot {
            skills: domain.skills.into_iter().map(CatalogMapper::skill_to_dto).collect(),
            faculty: domain.faculty.into_iter().map(FacultyMapper::to_dto).collect(),
            batches: domain.batches.into_iter().map(BatchMapper::to_dto).collect(),
            students: domain.students.into_iter().map(CatalogMapper::student_to_dto).collect(),
        }
    }
}

fn keep_valid<D, T>(kind: &str, records: Vec<D>, convert: impl Fn(D) -> Result<T>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|record| match convert(record) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping malformed {} record: {:#}", kind, e);
                None
            }
        })
        .collect()
}
