//! # Storage Traits
//!
//! Storage abstraction used by the roster service. Implementations hold whatever
//! roster the caller handed over; the scheduler itself never decides how or
//! where it is persisted.

use anyhow::Result;

use crate::backend::domain::models::{Batch, Faculty, Roster, Skill, Student};

pub trait SkillStorage: Send + Sync {
    /// Insert a skill, replacing any skill with the same id
    fn store_skill(&self, skill: &Skill) -> Result<()>;

    fn get_skill(&self, skill_id: &str) -> Result<Option<Skill>>;

    /// All skills in insertion order
    fn list_skills(&self) -> Result<Vec<Skill>>;
}

pub trait FacultyStorage: Send + Sync {
    /// Insert a faculty member, replacing any with the same id
    fn store_faculty(&self, faculty: &Faculty) -> Result<()>;

    fn get_faculty(&self, faculty_id: &str) -> Result<Option<Faculty>>;

    /// All faculty in insertion order
    fn list_faculty(&self) -> Result<Vec<Faculty>>;

    /// Returns true if the faculty member existed
    fn delete_faculty(&self, faculty_id: &str) -> Result<bool>;
}

pub trait BatchStorage: Send + Sync {
    /// Insert a batch, replacing any batch with the same id
    fn store_batch(&self, batch: &Batch) -> Result<()>;

    fn get_batch(&self, batch_id: &str) -> Result<Option<Batch>>;

    /// All batches in insertion order
    fn list_batches(&self) -> Result<Vec<Batch>>;

    /// Returns true if the batch existed
    fn delete_batch(&self, batch_id: &str) -> Result<bool>;
}

pub trait StudentStorage: Send + Sync {
    /// Insert a student, replacing any student with the same id
    fn store_student(&self, student: &Student) -> Result<()>;

    fn get_student(&self, student_id: &str) -> Result<Option<Student>>;

    /// All students in insertion order
    fn list_students(&self) -> Result<Vec<Student>>;

    /// Returns true if the student existed
    fn delete_student(&self, student_id: &str) -> Result<bool>;
}

/// Everything the roster service needs from a store
pub trait RosterStorage: SkillStorage + FacultyStorage + BatchStorage + StudentStorage {
    /// Consistent copy of the whole roster
    fn snapshot(&self) -> Result<Roster>;
}
