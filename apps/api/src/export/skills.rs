//! Skill Classifier — pluggable, trait-based bucketing of free-text skill bullets.
//!
//! Default: `KeywordSkillClassifier` (case-insensitive substring match against
//! fixed keyword lists). The section mapper only sees the trait, so a
//! table-driven or model-based classifier can replace it.
//!
//! `AppState` holds an `Arc<dyn SkillClassifier>`.

use serde::{Deserialize, Serialize};

use crate::export::document::{ExportBullet, SkillGroup};

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Tools,
    Other,
}

impl SkillCategory {
    /// Fixed emission order for skill groups.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }

    fn index(&self) -> usize {
        match self {
            SkillCategory::Languages => 0,
            SkillCategory::Frameworks => 1,
            SkillCategory::Tools => 2,
            SkillCategory::Other => 3,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait SkillClassifier: Send + Sync {
    /// Assigns one bullet's text to exactly one category.
    fn classify(&self, text: &str) -> SkillCategory;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillClassifier — default implementation
// ────────────────────────────────────────────────────────────────────────────

const LANGUAGE_KEYWORDS: &[&str] = &[
    "javascript", "typescript", "python", "java", "c++", "c#", "golang", "rust", "ruby", "php",
    "swift", "kotlin", "sql", "html", "css", "bash", "perl", "haskell", "elixir",
];

const FRAMEWORK_KEYWORDS: &[&str] = &[
    "react", "angular", "vue", "svelte", "next.js", "nuxt", "node.js", "express", "django",
    "flask", "fastapi", "spring", "rails", "laravel", ".net", "tailwind", "bootstrap", "jquery",
    "tensorflow", "pytorch",
];

const TOOL_KEYWORDS: &[&str] = &[
    "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "jenkins", "github", "gitlab",
    "linux", "postgres", "mongodb", "redis", "kafka", "nginx", "ansible", "webpack", "jira",
    "figma",
];

/// Case-insensitive substring matching, evaluated Languages → Frameworks → Tools.
///
/// A bullet naming several skills lands in the first category that matches any
/// keyword: "Python, Docker, AWS" is Languages. Unmatched text is Other.
pub struct KeywordSkillClassifier;

impl SkillClassifier for KeywordSkillClassifier {
    fn classify(&self, text: &str) -> SkillCategory {
        let lower = text.to_lowercase();
        let lists = [
            (SkillCategory::Languages, LANGUAGE_KEYWORDS),
            (SkillCategory::Frameworks, FRAMEWORK_KEYWORDS),
            (SkillCategory::Tools, TOOL_KEYWORDS),
        ];
        lists
            .into_iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(category, _)| category)
            .unwrap_or(SkillCategory::Other)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-document buckets
// ────────────────────────────────────────────────────────────────────────────

/// Skill bullets collected across every Skills section of one CV.
#[derive(Debug, Default)]
pub struct SkillBuckets {
    buckets: [Vec<ExportBullet>; 4],
}

impl SkillBuckets {
    pub fn push(&mut self, category: SkillCategory, bullet: ExportBullet) {
        self.buckets[category.index()].push(bullet);
    }

    /// One group per non-empty category, in the fixed category order.
    pub fn into_groups(self) -> Vec<SkillGroup> {
        let mut buckets = self.buckets;
        let mut groups = Vec::new();
        for category in SkillCategory::ALL {
            let bullets = std::mem::take(&mut buckets[category.index()]);
            if bullets.is_empty() {
                continue;
            }
            groups.push(SkillGroup {
                id: format!("skills-{}", category.slug()),
                category,
                title: category.title().to_string(),
                bullets,
                sort_order: groups.len() as u32 + 1,
            });
        }
        groups
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
