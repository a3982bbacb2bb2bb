//! scheduler/src/backend/io/mappers/catalog_mapper.rs

use anyhow::{Context, Result};
use shared::{
    CreateSkillRequest, SaveStudentRequest, Skill as SharedSkill, Student as SharedStudent,
};

use crate::backend::domain::commands::catalog::{CreateSkillCommand, SaveStudentCommand};
use crate::backend::domain::models::{Skill as DomainSkill, Student as DomainStudent};

/// Mapper for the simple roster records: skills and students.
pub struct CatalogMapper;

impl CatalogMapper {
    pub fn skill_to_domain(dto: SharedSkill) -> Result<DomainSkill> {
        let mut skill = DomainSkill::new(&dto.id, &dto.name, &dto.category)
            .with_context(|| format!("Invalid skill {}", dto.id))?;
        skill.description = dto.description;
        Ok(skill)
    }

    pub fn skill_to_dto(domain: DomainSkill) -> SharedSkill {
        SharedSkill {
            id: domain.id,
            name: domain.name,
            category: domain.category,
            description: domain.description,
        }
    }

    pub fn student_to_domain(dto: SharedStudent) -> Result<DomainStudent> {
        let mut student = DomainStudent::new(&dto.id, &dto.name, &dto.admission_number)
            .with_context(|| format!("Invalid student {}", dto.id))?;
        student.phone_number = dto.phone_number;
        Ok(student)
    }

    pub fn student_to_dto(domain: DomainStudent) -> SharedStudent {
        SharedStudent {
            id: domain.id,
            name: domain.name,
            admission_number: domain.admission_number,
            phone_number: domain.phone_number,
        }
    }

    pub fn to_create_skill_command(request: CreateSkillRequest) -> CreateSkillCommand {
        CreateSkillCommand {
            name: request.name,
            category: request.category,
            description: request.description,
        }
    }

    pub fn to_save_student_command(request: SaveStudentRequest) -> SaveStudentCommand {
        SaveStudentCommand {
            id: request.id,
            name: request.name,
            admission_number: request.admission_number,
            phone_number: request.phone_number,
        }
    }
}
