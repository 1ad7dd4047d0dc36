//! Static descriptors for the displayable profile fields.

use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileFieldKey {
    FirstName,
    LastName,
    Email,
    Phone,
    Location,
    LinkedinUrl,
    GithubUrl,
    PortfolioUrl,
}

#[derive(Debug, Clone, Copy)]
pub struct ProfileField {
    pub key: ProfileFieldKey,
    pub label: &'static str,
    pub required: bool,
}

/// Display order for profile forms and views.
pub const PROFILE_FIELDS: &[ProfileField] = &[
    ProfileField { key: ProfileFieldKey::FirstName, label: "First name", required: true },
    ProfileField { key: ProfileFieldKey::LastName, label: "Last name", required: true },
    ProfileField { key: ProfileFieldKey::Email, label: "Email", required: true },
    ProfileField { key: ProfileFieldKey::Phone, label: "Phone", required: false },
    ProfileField { key: ProfileFieldKey::Location, label: "Location", required: false },
    ProfileField { key: ProfileFieldKey::LinkedinUrl, label: "LinkedIn", required: false },
    ProfileField { key: ProfileFieldKey::GithubUrl, label: "GitHub", required: false },
    ProfileField { key: ProfileFieldKey::PortfolioUrl, label: "Portfolio", required: false },
];

impl ProfileRow {
    pub fn field(&self, key: ProfileFieldKey) -> Option<&str> {
        let value = match key {
            ProfileFieldKey::FirstName => &self.first_name,
            ProfileFieldKey::LastName => &self.last_name,
            ProfileFieldKey::Email => &self.email,
            ProfileFieldKey::Phone => &self.phone,
            ProfileFieldKey::Location => &self.location,
            ProfileFieldKey::LinkedinUrl => &self.linkedin_url,
            ProfileFieldKey::GithubUrl => &self.github_url,
            ProfileFieldKey::PortfolioUrl => &self.portfolio_url,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayField {
    pub key: ProfileFieldKey,
    pub label: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCompleteness {
    pub filled: usize,
    pub total: usize,
    pub missing_required: Vec<ProfileFieldKey>,
}

pub fn display_fields(profile: &ProfileRow) -> Vec<DisplayField> {
    PROFILE_FIELDS
        .iter()
        .map(|f| DisplayField {
            key: f.key,
            label: f.label.to_string(),
            value: profile.field(f.key).map(str::to_string),
        })
        .collect()
}

pub fn completeness(profile: &ProfileRow) -> ProfileCompleteness {
    let filled = PROFILE_FIELDS
        .iter()
        .filter(|f| profile.field(f.key).is_some())
        .count();
    let missing_required = PROFILE_FIELDS
        .iter()
        .filter(|f| f.required && profile.field(f.key).is_none())
        .map(|f| f.key)
        .collect();

    ProfileCompleteness {
        filled,
        total: PROFILE_FIELDS.len(),
        missing_required,
    }
}
