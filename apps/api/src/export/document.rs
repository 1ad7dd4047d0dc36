//! The flat, renderer-ready Export Document.
//!
//! Output-only: built fresh on every export and never persisted. PDF templates
//! consume this exact shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::export::skills::SkillCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub header: ExportHeader,
    pub summary: Option<String>,
    pub experience: Vec<ExportEntry>,
    pub projects: Vec<ExportEntry>,
    pub education: Vec<ExportEntry>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<ExportEntry>,
    pub other: Vec<ExportEntry>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportHeader {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
}

/// One mapped section. `sort_order` is 1-based within its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub id: String,
    pub title: String,
    pub organization: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
    pub bullets: Vec<ExportBullet>,
    pub sort_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBullet {
    /// `<section-id>-bullet-<index>`
    pub id: String,
    pub content: String,
}

/// Skill bullets regrouped under one synthetic entry per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub id: String,
    pub category: SkillCategory,
    pub title: String,
    pub bullets: Vec<ExportBullet>,
    pub sort_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub title: String,
    pub target_job_title: Option<String>,
    pub generated_at: DateTime<Utc>,
}
