use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The six categories a CV section can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionType {
    Experience,
    Projects,
    Education,
    Skills,
    Certifications,
    Other,
}

impl SectionType {
    /// Parses a stored section type. Case-insensitive; singular forms are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "experience" => Some(SectionType::Experience),
            "projects" | "project" => Some(SectionType::Projects),
            "education" => Some(SectionType::Education),
            "skills" | "skill" => Some(SectionType::Skills),
            "certifications" | "certification" => Some(SectionType::Certifications),
            "other" => Some(SectionType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CvRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub target_position: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dates are read as text so that malformed legacy values survive to the exporter.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CvSectionRow {
    pub id: Uuid,
    pub cv_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub section_type: String,
    pub title: String,
    pub organization: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
    pub sort_order: i32,
    pub master_experience_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CvBulletRow {
    pub id: Uuid,
    pub section_id: Uuid,
    pub content: String,
    pub sort_order: i32,
    pub previous_content: Option<String>,
}

/// A section together with its bullets, as loaded for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvSection {
    #[serde(flatten)]
    pub section: CvSectionRow,
    pub bullets: Vec<CvBulletRow>,
}
