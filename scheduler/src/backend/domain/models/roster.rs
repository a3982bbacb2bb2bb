use super::{Batch, Faculty, Skill, Student};

/// Point-in-time copy of everything the scheduler reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub skills: Vec<Skill>,
    pub faculty: Vec<Faculty>,
    pub batches: Vec<Batch>,
    pub students: Vec<Student>,
}

impl Roster {
    pub fn find_faculty(&self, faculty_id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|faculty| faculty.id == faculty_id)
    }

    pub fn find_batch(&self, batch_id: &str) -> Option<&Batch> {
        self.batches.iter().find(|batch| batch.id == batch_id)
    }

    pub fn has_skill(&self, skill_id: &str) -> bool {
        self.skills.iter().any(|skill| skill.id == skill_id)
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.students.iter().any(|student| student.id == student_id)
    }
}
