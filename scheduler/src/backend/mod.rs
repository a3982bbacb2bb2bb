//! # Backend Module
//!
//! Contains all logic of the institute scheduler.
//!
//! The backend brings together three layers:
//! - **Domain**: scheduling rules (free slots, batch conflicts) and roster maintenance
//! - **Storage**: the in-memory roster the services read and write
//! - **IO**: DTO mapping, request handlers and snapshot files
//!
//! ## Architecture
//!
//! ```text
//! Caller (CLI, embedding application)
//!     ↓
//! IO Layer (handlers, mappers)
//!     ↓
//! Domain Layer (services, validator)
//!     ↓
//! Storage Layer (in-memory roster)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use shared::RosterSnapshot;
use std::sync::Arc;
use tracing::info;

use crate::backend::config::SchedulerConfig;
use crate::backend::domain::{FreeSlotService, RosterService};
use crate::backend::io::mappers::RosterMapper;
use crate::backend::storage::InMemoryRoster;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub roster_service: RosterService<InMemoryRoster>,
    pub free_slot_service: FreeSlotService,
}

/// Initialize the backend over the given roster snapshot.
///
/// Records that fail validation are skipped with a warning.
pub fn initialize_backend(config: &SchedulerConfig, snapshot: RosterSnapshot) -> AppState {
    info!("Setting up roster");
    let roster = RosterMapper::to_domain(snapshot);
    info!(
        "Roster has {} skills, {} faculty, {} batches, {} students",
        roster.skills.len(),
        roster.faculty.len(),
        roster.batches.len(),
        roster.students.len()
    );

    info!("Setting up domain services");
    let storage = Arc::new(InMemoryRoster::with_roster(roster));

    AppState {
        roster_service: RosterService::new(storage),
        free_slot_service: FreeSlotService::new(config.max_range_days),
    }
}
