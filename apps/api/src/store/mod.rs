//! Persistence collaborator for CVs, the master library and profiles.
//!
//! Every read and write is scoped by the caller's user id. A row owned by
//! someone else is indistinguishable from a missing row (`Ok(None)`).

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::library::seeding::SectionSeed;
use crate::models::cv::{CvBulletRow, CvRow, CvSection};
use crate::models::library::MasterExperience;
use crate::models::profile::ProfileRow;

/// Carried in `AppState` as `Arc<dyn CvStore>`.
#[async_trait]
pub trait CvStore: Send + Sync {
    async fn find_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<Option<CvRow>, AppError>;

    /// Sections ordered by stored sort position, each with its bullets.
    async fn list_sections(&self, user_id: Uuid, cv_id: Uuid) -> Result<Vec<CvSection>, AppError>;

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError>;

    async fn find_master_experience(
        &self,
        user_id: Uuid,
        master_id: Uuid,
    ) -> Result<Option<MasterExperience>, AppError>;

    /// Appends a section after the CV's last one. `None` when the CV is not the caller's.
    async fn insert_seeded_section(
        &self,
        user_id: Uuid,
        cv_id: Uuid,
        seed: &SectionSeed,
    ) -> Result<Option<CvSection>, AppError>;

    /// Replaces a bullet's content in one write. When the text changes, the
    /// replaced text becomes `previous_content`; identical text leaves
    /// `previous_content` as it was. `None` when the bullet is not the caller's.
    async fn update_bullet(
        &self,
        user_id: Uuid,
        bullet_id: Uuid,
        content: &str,
    ) -> Result<Option<CvBulletRow>, AppError>;
}
