use uuid::Uuid;

use super::{require_non_empty, ModelError};

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

impl Skill {
    pub fn new(id: &str, name: &str, category: &str) -> Result<Self, ModelError> {
        Ok(Self {
            id: require_non_empty("Skill id", id)?,
            name: require_non_empty("Skill name", name)?,
            category: require_non_empty("Skill category", category)?,
            description: None,
        })
    }

    pub fn generate_id() -> String {
        format!("skill::{}", Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_skill() {
        let skill = Skill::new("s1", " Guitar ", "Music").unwrap();
        assert_eq!(skill.name, "Guitar");
        assert_eq!(skill.description, None);

        assert_eq!(
            Skill::new("s1", "Guitar", "  ").unwrap_err(),
            ModelError::EmptyField("Skill category")
        );
        assert!(Skill::generate_id().starts_with("skill::"));
    }
}
