//! # IO Module
//!
//! Interface layer between callers and the domain logic.
//!
//! Callers speak in the DTOs of the `shared` crate: dates as `YYYY-MM-DD`,
//! times as `HH:MM`, weekdays by full English name. This layer parses those
//! into domain values, calls the services and formats results back.
//!
//! ## Key Responsibilities
//!
//! - **Mapping**: converting between DTOs and domain models (see [`mappers`])
//! - **Handlers**: one function per roster operation (see [`handlers`])
//! - **Error Translation**: turning domain errors into status classes
//! - **Snapshot Files**: loading and saving the JSON roster snapshot

pub mod handlers;
pub mod mappers;
pub mod snapshot;

pub use handlers::HandlerError;
pub use snapshot::{load_snapshot, save_snapshot};
