//! scheduler/src/backend/io/mappers/slot_mapper.rs

use anyhow::{anyhow, Context, Result};
use shared::{
    DaySlots, FacultyFreeSlots as SharedFacultyFreeSlots, FreeSlotsRequest, FreeSlotsResponse,
};

use crate::backend::domain::commands::slots::FreeSlotQuery;
use crate::backend::domain::free_slot_service::FacultyFreeSlots;
use crate::backend::domain::models::{format_date, parse_date};
use crate::backend::domain::recurrence::DateRange;
use crate::backend::io::mappers::faculty_mapper::FacultyMapper;

/// Mapper between free-slot DTOs and the domain query/result types.
pub struct SlotMapper;

impl SlotMapper {
    /// Both dates are required; an inverted range is rejected here.
    pub fn to_query(request: FreeSlotsRequest) -> Result<FreeSlotQuery> {
        let (Some(start), Some(end)) = (request.start_date.as_deref(), request.end_date.as_deref())
        else {
            return Err(anyhow!("Start date and end date are required."));
        };

        let range = DateRange::new(parse_date(start)?, parse_date(end)?)
            .with_context(|| format!("Invalid date range {} to {}", start, end))?;

        Ok(FreeSlotQuery {
            range,
            faculty_id: request.faculty_id,
            skill_id: request.skill_id,
        })
    }

    pub fn to_response(results: Vec<FacultyFreeSlots>) -> FreeSlotsResponse {
        FreeSlotsResponse {
            results: results.iter().map(Self::to_faculty_dto).collect(),
        }
    }

    fn to_faculty_dto(result: &FacultyFreeSlots) -> SharedFacultyFreeSlots {
        SharedFacultyFreeSlots {
            faculty: FacultyMapper::to_summary_dto(&result.faculty),
            slots: result
                .slots
                .iter()
                .map(|slot| DaySlots {
                    date: format_date(slot.date),
                    time: slot.windows.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }
}
