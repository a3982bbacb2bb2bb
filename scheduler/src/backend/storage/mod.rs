//! # Storage Module
//!
//! Holds the roster snapshot the domain services work on.
//!
//! The domain layer only sees the traits in [`traits`]; the in-memory store is
//! the implementation the binary and the tests use. Durable persistence is left
//! to whoever embeds the scheduler: they load their records, hand them over as
//! a snapshot, and write back whatever the roster service accepted.

pub mod memory;
pub mod traits;

pub use memory::InMemoryRoster;
pub use traits::{BatchStorage, FacultyStorage, RosterStorage, SkillStorage, StudentStorage};
