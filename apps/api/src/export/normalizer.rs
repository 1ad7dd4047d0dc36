//! CV Export Normalizer — orchestrates the export pipeline.
//!
//! Flow: ownership-checked CV read → sections + profile (concurrent) →
//!       header → project/route each section → date sort → ExportDocument.
//!
//! Read-only: nothing is written back, so repeated and concurrent exports of
//! the same CV are safe.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::bullets::project_bullets;
use crate::export::dates::{sort_key, sort_key_or};
use crate::export::document::{ExportDocument, ExportEntry, ExportHeader, ExportMetadata};
use crate::export::mapper::{RoutedSections, SectionRouter};
use crate::export::skills::SkillClassifier;
use crate::models::cv::SectionType;
use crate::models::profile::ProfileRow;
use crate::store::CvStore;

/// Parameters for a single export.
pub struct ExportParams<'a> {
    pub user_id: Uuid,
    pub cv_id: Uuid,
    /// Supplied by the caller so identical data exports to identical output.
    pub generated_at: DateTime<Utc>,
    pub placeholder_name: &'a str,
}

/// Builds the Export Document for one CV.
///
/// Fails with `NotFound` when the CV is not the caller's, and with
/// `ProfileIncomplete` when the caller has no profile yet. No partial
/// document is ever returned.
pub async fn export_cv(
    store: &dyn CvStore,
    classifier: &dyn SkillClassifier,
    params: ExportParams<'_>,
) -> Result<ExportDocument, AppError> {
    let ExportParams {
        user_id,
        cv_id,
        generated_at,
        placeholder_name,
    } = params;

    let cv = store
        .find_cv(user_id, cv_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("CV {cv_id} not found")))?;

    let (sections, profile) = tokio::try_join!(
        store.list_sections(user_id, cv_id),
        store.find_profile(user_id),
    )?;
    let profile = profile.ok_or_else(|| {
        AppError::ProfileIncomplete("Complete your profile before exporting a CV".to_string())
    })?;

    let header = build_header(&profile, placeholder_name);

    let mut router = SectionRouter::new(classifier);
    for cv_section in &sections {
        let section = &cv_section.section;
        let Some(section_type) = SectionType::parse(&section.section_type) else {
            warn!(
                "Skipping section {} of CV {cv_id}: unknown type '{}'",
                section.id, section.section_type
            );
            continue;
        };
        let bullets = project_bullets(section.id, &cv_section.bullets);
        router.route(section, section_type, bullets);
    }

    let RoutedSections {
        mut experience,
        mut projects,
        mut education,
        skills,
        certifications,
        other,
    } = router.finish();

    sort_desc_by(&mut experience, |e| sort_key(e.start_date.as_deref()));
    sort_desc_by(&mut education, |e| sort_key(e.start_date.as_deref()));
    // Ongoing projects often carry a free-text end date ("Present"); their start date still counts.
    sort_desc_by(&mut projects, |e| {
        sort_key_or(e.end_date.as_deref(), e.start_date.as_deref())
    });

    info!(
        "Exported CV {cv_id} for user {user_id}: {} sections, {} experience, {} skill groups",
        sections.len(),
        experience.len(),
        skills.len()
    );

    Ok(ExportDocument {
        header,
        summary: non_blank(cv.summary.as_deref()),
        experience,
        projects,
        education,
        skills,
        certifications,
        other,
        metadata: ExportMetadata {
            title: cv.title,
            target_job_title: cv.target_position,
            generated_at,
        },
    })
}

/// Header block for the PDF. Full name falls back to the placeholder when empty.
pub fn build_header(profile: &ProfileRow, placeholder_name: &str) -> ExportHeader {
    let full_name = format!(
        "{} {}",
        profile.first_name.as_deref().unwrap_or(""),
        profile.last_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string();

    ExportHeader {
        full_name: if full_name.is_empty() {
            placeholder_name.to_string()
        } else {
            full_name
        },
        email: non_blank(profile.email.as_deref()),
        phone: non_blank(profile.phone.as_deref()),
        location: non_blank(profile.location.as_deref()),
        linkedin_url: non_blank(profile.linkedin_url.as_deref()),
        github_url: non_blank(profile.github_url.as_deref()),
        portfolio_url: non_blank(profile.portfolio_url.as_deref()),
    }
}

/// Stable descending sort; entries with equal keys keep processing order.
fn sort_desc_by<F>(entries: &mut [ExportEntry], key: F)
where
    F: Fn(&ExportEntry) -> NaiveDate,
{
    entries.sort_by_key(|e| Reverse(key(e)));
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
