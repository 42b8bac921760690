//! Edit commands and the document reducer.
//!
//! Every field the editor can touch has its own command variant with a
//! precisely typed payload, dispatched through the single pure function
//! `apply`. The reducer never mutates its input: each command produces a
//! new `ResumeDocument`, which the caller hands back to the store as a
//! whole-document replacement.
//!
//! Commands addressing an entry by id are silent no-ops when the id is
//! absent. This is what makes a late enhancement write-back safe: if the
//! entry was removed while the request was outstanding, applying the
//! command changes nothing.

pub mod handlers;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{Education, Experience, Language, ResumeDocument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditCommand {
    // Personal
    SetFullName { value: String },
    SetLocation { value: String },
    SetPhone { value: String },
    SetEmail { value: String },
    SetSummary { value: String },
    SetHobbies { value: String },

    // Experience
    AddExperience,
    RemoveExperience { id: Uuid },
    SetExperienceRole { id: Uuid, value: String },
    SetExperienceCompany { id: Uuid, value: String },
    SetExperienceLocation { id: Uuid, value: String },
    SetExperienceStartDate { id: Uuid, value: String },
    SetExperienceEndDate { id: Uuid, value: String },
    SetExperienceDescription { id: Uuid, lines: Vec<String> },

    // Education
    AddEducation,
    RemoveEducation { id: Uuid },
    SetEducationSchool { id: Uuid, value: String },
    SetEducationLocation { id: Uuid, value: String },
    SetEducationDegree { id: Uuid, value: String },
    SetEducationField { id: Uuid, value: String },
    SetEducationGraduationDate { id: Uuid, value: String },
    SetEducationDescription { id: Uuid, lines: Vec<String> },

    // Skills (positional: skills are plain strings with no identity)
    AddSkill { value: String },
    SetSkill { index: usize, value: String },
    RemoveSkill { index: usize },

    // Languages
    AddLanguage,
    RemoveLanguage { id: Uuid },
    SetLanguageName { id: Uuid, value: String },
    SetLanguageLevel { id: Uuid, value: String },
    SetLanguagePercentage { id: Uuid, value: u8 },
}

/// Applies one command, returning the new document. The input is untouched.
pub fn apply(doc: &ResumeDocument, command: EditCommand) -> ResumeDocument {
    let mut next = doc.clone();
    match command {
        EditCommand::SetFullName { value } => next.personal.full_name = value,
        EditCommand::SetLocation { value } => next.personal.location = value,
        EditCommand::SetPhone { value } => next.personal.phone = value,
        EditCommand::SetEmail { value } => next.personal.email = value,
        EditCommand::SetSummary { value } => next.personal.summary = value,
        EditCommand::SetHobbies { value } => next.hobbies = value,

        EditCommand::AddExperience => next.experience.push(Experience {
            id: Uuid::new_v4(),
            role: "New Role".to_string(),
            company: "Company".to_string(),
            location: "City, State".to_string(),
            start_date: "MM/YYYY".to_string(),
            end_date: "Current".to_string(),
            description: vec!["Point 1".to_string()],
        }),
        EditCommand::RemoveExperience { id } => next.experience.retain(|e| e.id != id),
        EditCommand::SetExperienceRole { id, value } => {
            with_experience(&mut next, id, |e| e.role = value)
        }
        EditCommand::SetExperienceCompany { id, value } => {
            with_experience(&mut next, id, |e| e.company = value)
        }
        EditCommand::SetExperienceLocation { id, value } => {
            with_experience(&mut next, id, |e| e.location = value)
        }
        EditCommand::SetExperienceStartDate { id, value } => {
            with_experience(&mut next, id, |e| e.start_date = value)
        }
        EditCommand::SetExperienceEndDate { id, value } => {
            with_experience(&mut next, id, |e| e.end_date = value)
        }
        EditCommand::SetExperienceDescription { id, lines } => {
            with_experience(&mut next, id, |e| e.description = lines)
        }

        EditCommand::AddEducation => next.education.push(Education {
            id: Uuid::new_v4(),
            school: "School".to_string(),
            location: "City, State".to_string(),
            degree: "Degree".to_string(),
            field: "Field of Study".to_string(),
            graduation_date: "YYYY".to_string(),
            description: Vec::new(),
        }),
        EditCommand::RemoveEducation { id } => next.education.retain(|e| e.id != id),
        EditCommand::SetEducationSchool { id, value } => {
            with_education(&mut next, id, |e| e.school = value)
        }
        EditCommand::SetEducationLocation { id, value } => {
            with_education(&mut next, id, |e| e.location = value)
        }
        EditCommand::SetEducationDegree { id, value } => {
            with_education(&mut next, id, |e| e.degree = value)
        }
        EditCommand::SetEducationField { id, value } => {
            with_education(&mut next, id, |e| e.field = value)
        }
        EditCommand::SetEducationGraduationDate { id, value } => {
            with_education(&mut next, id, |e| e.graduation_date = value)
        }
        EditCommand::SetEducationDescription { id, lines } => {
            with_education(&mut next, id, |e| e.description = lines)
        }

        EditCommand::AddSkill { value } => next.skills.push(value),
        EditCommand::SetSkill { index, value } => {
            if let Some(slot) = next.skills.get_mut(index) {
                *slot = value;
            }
        }
        EditCommand::RemoveSkill { index } => {
            if index < next.skills.len() {
                next.skills.remove(index);
            }
        }

        EditCommand::AddLanguage => next.languages.push(Language {
            id: Uuid::new_v4(),
            name: "Language".to_string(),
            level: "B2".to_string(),
            percentage: 50,
        }),
        EditCommand::RemoveLanguage { id } => next.languages.retain(|l| l.id != id),
        EditCommand::SetLanguageName { id, value } => {
            with_language(&mut next, id, |l| l.name = value)
        }
        EditCommand::SetLanguageLevel { id, value } => {
            with_language(&mut next, id, |l| l.level = value)
        }
        EditCommand::SetLanguagePercentage { id, value } => {
            with_language(&mut next, id, |l| l.percentage = value.min(100))
        }
    }
    next
}

fn with_experience(doc: &mut ResumeDocument, id: Uuid, edit: impl FnOnce(&mut Experience)) {
    if let Some(entry) = doc.experience.iter_mut().find(|e| e.id == id) {
        edit(entry);
    }
}

fn with_education(doc: &mut ResumeDocument, id: Uuid, edit: impl FnOnce(&mut Education)) {
    if let Some(entry) = doc.education.iter_mut().find(|e| e.id == id) {
        edit(entry);
    }
}

fn with_language(doc: &mut ResumeDocument, id: Uuid, edit: impl FnOnce(&mut Language)) {
    if let Some(entry) = doc.languages.iter_mut().find(|l| l.id == id) {
        edit(entry);
    }
}
