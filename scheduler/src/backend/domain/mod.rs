//! # Domain Module
//!
//! Contains the scheduling rules of the institute roster.
//!
//! Everything here works on plain domain values (see [`models`]) and knows
//! nothing about how the roster reached memory or how results leave it.
//!
//! ## Module Organization
//!
//! - **interval**: half-open time-of-day intervals and subtraction
//! - **recurrence**: inclusive date ranges expanded day by day
//! - **free_slot_service**: free windows per faculty member and date
//! - **conflict_validator**: availability and clash check for a proposed batch
//! - **roster_service**: roster maintenance, enforcing the conflict check on writes
//! - **commands**: input types for the services
//!
//! ## Business Rules
//!
//! - A faculty member's time on a date is their availability window for that
//!   weekday minus the hours of every batch they teach on that date
//! - Times are compared at minute precision; a batch ending at 12:00 and one
//!   starting at 12:00 do not touch
//! - Date ranges include both ends
//! - A batch only occupies a faculty member on dates inside its own range that
//!   fall on one of its weekdays
//! - A proposed batch must sit inside the availability window of each of its
//!   weekdays and must not share a date and an overlapping time with any other
//!   batch of the same faculty member

pub mod commands;
pub mod conflict_validator;
pub mod free_slot_service;
pub mod interval;
pub mod models;
pub mod recurrence;
pub mod roster_service;

pub use commands::{batch::SaveBatchCommand, slots::FreeSlotQuery, slots::ValidateScheduleCommand};
pub use conflict_validator::{validate_schedule, BatchConflict, ClashingBatch};
pub use free_slot_service::{FacultyFreeSlots, FreeSlotService, FreeWindow};
pub use interval::{subtract_many, TimeInterval};
pub use recurrence::{expand_dates, DateRange, Days, RangeError};
pub use roster_service::{RosterError, RosterService};
