//! Seeds a CV section from a master experience.
//!
//! The master rows are only read. The CV copy records `master_experience_id`
//! for traceability and can be edited freely afterwards.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::CvSection;
use crate::models::library::MasterExperience;
use crate::store::CvStore;

/// Everything needed to insert a seeded section; the store assigns ids and positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSeed {
    pub master_experience_id: Uuid,
    pub section_type: String,
    pub title: String,
    pub organization: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
    /// Bullet contents in master order, blanks removed.
    pub bullets: Vec<String>,
}

pub fn plan_seed(master: &MasterExperience) -> SectionSeed {
    let experience = &master.experience;

    let mut ordered: Vec<_> = master.bullets.iter().collect();
    ordered.sort_by_key(|b| b.sort_order);

    SectionSeed {
        master_experience_id: experience.id,
        section_type: experience.section_type.clone(),
        title: experience.title.clone(),
        organization: experience.organization.clone(),
        start_date: experience.start_date.clone(),
        end_date: experience.end_date.clone(),
        location: experience.location.clone(),
        link: experience.link.clone(),
        bullets: ordered
            .into_iter()
            .filter(|b| !b.content.trim().is_empty())
            .map(|b| b.content.clone())
            .collect(),
    }
}

/// Copies a master experience into one of the caller's CVs.
pub async fn seed_section(
    store: &dyn CvStore,
    user_id: Uuid,
    cv_id: Uuid,
    master_id: Uuid,
) -> Result<CvSection, AppError> {
    store
        .find_cv(user_id, cv_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("CV {cv_id} not found")))?;

    let master = store
        .find_master_experience(user_id, master_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Master experience {master_id} not found")))?;

    let seed = plan_seed(&master);
    let section = store
        .insert_seeded_section(user_id, cv_id, &seed)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("CV {cv_id} not found")))?;

    info!(
        "Seeded '{}' into CV {cv_id} with {} bullets",
        section.section.title,
        section.bullets.len()
    );
    Ok(section)
}
