//! In-memory roster store.
//!
//! Holds one [`Roster`] behind a lock and hands out clones. Cloning the store
//! shares the same roster.

use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::traits::{BatchStorage, FacultyStorage, RosterStorage, SkillStorage, StudentStorage};
use crate::backend::domain::models::{Batch, Faculty, Roster, Skill, Student};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    roster: Arc<RwLock<Roster>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing roster
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Roster>> {
        self.roster.read().map_err(|_| anyhow!("Roster lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Roster>> {
        self.roster.write().map_err(|_| anyhow!("Roster lock poisoned"))
    }
}

/// Replace the item with the same id, or append it
fn upsert<T: Clone>(items: &mut Vec<T>, item: &T, same_id: impl Fn(&T) -> bool) {
    match items.iter_mut().find(|existing| same_id(existing)) {
        Some(existing) => *existing = item.clone(),
        None => items.push(item.clone()),
    }
}

/// Remove the item matching `same_id`; true if one was removed
fn remove<T>(items: &mut Vec<T>, same_id: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !same_id(item));
    items.len() != before
}

impl SkillStorage for InMemoryRoster {
    fn store_skill(&self, skill: &Skill) -> Result<()> {
        debug!("Storing skill {}", skill.id);
        upsert(&mut self.write()?.skills, skill, |s| s.id == skill.id);
        Ok(())
    }

    fn get_skill(&self, skill_id: &str) -> Result<Option<Skill>> {
        Ok(self.read()?.skills.iter().find(|s| s.id == skill_id).cloned())
    }

    fn list_skills(&self) -> Result<Vec<Skill>> {
        Ok(self.read()?.skills.clone())
    }
}

impl FacultyStorage for InMemoryRoster {
    fn store_faculty(&self, faculty: &Faculty) -> Result<()> {
        debug!("Storing faculty {}", faculty.id);
        upsert(&mut self.write()?.faculty, faculty, |f| f.id == faculty.id);
        Ok(())
    }

    fn get_faculty(&self, faculty_id: &str) -> Result<Option<Faculty>> {
        Ok(self.read()?.find_faculty(faculty_id).cloned())
    }

    fn list_faculty(&self) -> Result<Vec<Faculty>> {
        Ok(self.read()?.faculty.clone())
    }

    fn delete_faculty(&self, faculty_id: &str) -> Result<bool> {
        Ok(remove(&mut self.write()?.faculty, |f| f.id == faculty_id))
    }
}

impl BatchStorage for InMemoryRoster {
    fn store_batch(&self, batch: &Batch) -> Result<()> {
        debug!("Storing batch {}", batch.id);
        upsert(&mut self.write()?.batches, batch, |b| b.id == batch.id);
        Ok(())
    }

    fn get_batch(&self, batch_id: &str) -> Result<Option<Batch>> {
        Ok(self.read()?.find_batch(batch_id).cloned())
    }

    fn list_batches(&self) -> Result<Vec<Batch>> {
        Ok(self.read()?.batches.clone())
    }

    fn delete_batch(&self, batch_id: &str) -> Result<bool> {
        Ok(remove(&mut self.write()?.batches, |b| b.id == batch_id))
    }
}

impl StudentStorage for InMemoryRoster {
    fn store_student(&self, student: &Student) -> Result<()> {
        debug!("Storing student {}", student.id);
        upsert(&mut self.write()?.students, student, |s| s.id == student.id);
        Ok(())
    }

    fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        Ok(self.read()?.students.iter().find(|s| s.id == student_id).cloned())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.read()?.students.clone())
    }

    fn delete_student(&self, student_id: &str) -> Result<bool> {
        Ok(remove(&mut self.write()?.students, |s| s.id == student_id))
    }
}

impl RosterStorage for InMemoryRoster {
    fn snapshot(&self) -> Result<Roster> {
        Ok(self.read()?.clone())
    }
}
