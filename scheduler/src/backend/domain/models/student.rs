use uuid::Uuid;

use super::{require_non_empty, ModelError};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub admission_number: String,
    pub phone_number: Option<String>,
}

impl Student {
    pub fn new(id: &str, name: &str, admission_number: &str) -> Result<Self, ModelError> {
        Ok(Self {
            id: require_non_empty("Student id", id)?,
            name: require_non_empty("Student name", name)?,
            admission_number: require_non_empty("Admission number", admission_number)?,
            phone_number: None,
        })
    }

    pub fn generate_id() -> String {
        format!("student::{}", Uuid::new_v4())
    }
}
