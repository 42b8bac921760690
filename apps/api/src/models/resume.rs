//! The resume document model. One `ResumeDocument` is the whole state of an
//! editing session; edits always produce a new value (see `editor::apply`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact block and summary shown at the top of the resume.
/// All fields are free text and may be empty; no format validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub full_name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub summary: String,
}

/// A single position. `id` is assigned at creation and never reused; it is
/// identity for update/removal only, never ordering (insertion order is
/// display order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// One bullet per line. Blank lines are kept in the document and
    /// filtered at render time.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub location: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: Uuid,
    pub name: String,
    /// e.g. "C2", "Proficient"
    pub level: String,
    /// Fill level of the preview bar. The reducer clamps writes to 0-100.
    pub percentage: u8,
}

/// The root document. All sequences render in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal: Personal,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub languages: Vec<Language>,
    pub hobbies: String,
}

impl ResumeDocument {
    /// The seed resume a fresh session starts from, so the editor is
    /// immediately demonstrable.
    pub fn sample() -> Self {
        ResumeDocument {
            personal: Personal {
                full_name: "Naseem Ahmad".to_string(),
                location: "Gurgaon, India 122018".to_string(),
                phone: "+91 84499 57860".to_string(),
                email: "naseemchoudhary18@gmail.com".to_string(),
                summary: "Customer Support professional with 10 months of experience at \
                          Concentrix Pvt. Ltd. Skilled in handling customer queries, resolving \
                          issues quickly, and ensuring high customer satisfaction. Experienced \
                          with CRM tools and multitasking across chat platforms. Known for clear \
                          communication, patience, and a solution-focused approach. Looking to \
                          grow my career in customer support and provide excellent service to \
                          clients."
                    .to_string(),
            },
            experience: vec![Experience {
                id: Uuid::new_v4(),
                role: "CUSTOMER SUPPORT ADVISOR".to_string(),
                company: "Concentrix Pvt. Ltd. (Blended Process)".to_string(),
                location: "Gurgaon".to_string(),
                start_date: "04/2023".to_string(),
                end_date: "Current".to_string(),
                description: vec![
                    "Handled real-time chat support for Uber riders and drivers, resolving 60-80 queries per shift.".to_string(),
                    "Assisted customers with trip payments, cancellations, refunds, app errors, and account access.".to_string(),
                    "Maintained high CSAT scores (90%+) by providing prompt and empathetic solutions.".to_string(),
                    "Followed Uber's SOPs and quality standards while handling sensitive customer data.".to_string(),
                    "Logged and tracked issues accurately using Uber's internal CRM and ticketing systems.".to_string(),
                ],
            }],
            skills: vec![
                "Customer service".to_string(),
                "Ticketing systems".to_string(),
                "Problem resolution".to_string(),
                "Time management".to_string(),
                "Technical support".to_string(),
                "Positive attitude".to_string(),
                "Client communication".to_string(),
                "Problem-solving".to_string(),
                "Data management".to_string(),
                "Relationship building".to_string(),
            ],
            education: vec![Education {
                id: Uuid::new_v4(),
                school: "Lovely Professional University".to_string(),
                location: "Phagwara, IN-PB".to_string(),
                degree: "B Tech".to_string(),
                field: "Computer Science".to_string(),
                graduation_date: "2020".to_string(),
                description: vec![
                    "Developed strong problem-solving and analytical skills.".to_string(),
                    "Improved communication, documentation, and reporting skills through projects and presentations.".to_string(),
                    "Learned to work with systems, tools, and processes, which helps in understanding CRM and workflows.".to_string(),
                    "Gained experience in teamwork, time management, and handling deadlines.".to_string(),
                ],
            }],
            languages: vec![
                Language {
                    id: Uuid::new_v4(),
                    name: "English".to_string(),
                    level: "C2".to_string(),
                    percentage: 95,
                },
                Language {
                    id: Uuid::new_v4(),
                    name: "Hindi".to_string(),
                    level: "C2".to_string(),
                    percentage: 100,
                },
            ],
            hobbies: "My hobbies include improving my English communication, reading online \
                      articles, playing cricket, and learning new skills. These hobbies help me \
                      stay updated, stay active, and improve my confidence."
                .to_string(),
        }
    }
}
