//! In-memory `CvStore` used by unit and router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::library::seeding::SectionSeed;
use crate::models::cv::{CvBulletRow, CvRow, CvSection, CvSectionRow};
use crate::models::library::{MasterBulletRow, MasterExperience, MasterExperienceRow};
use crate::models::profile::ProfileRow;
use crate::store::CvStore;

#[derive(Default)]
struct Tables {
    cvs: Vec<CvRow>,
    sections: Vec<CvSectionRow>,
    bullets: Vec<CvBulletRow>,
    profiles: Vec<ProfileRow>,
    masters: Vec<MasterExperienceRow>,
    master_bullets: Vec<MasterBulletRow>,
}

impl Tables {
    fn owns_cv(&self, user_id: Uuid, cv_id: Uuid) -> bool {
        self.cvs.iter().any(|c| c.id == cv_id && c.user_id == user_id)
    }

    fn owns_bullet(&self, user_id: Uuid, bullet_id: Uuid) -> bool {
        self.bullets
            .iter()
            .find(|b| b.id == bullet_id)
            .and_then(|b| self.sections.iter().find(|s| s.id == b.section_id))
            .map(|s| self.owns_cv(user_id, s.cv_id))
            .unwrap_or(false)
    }
}

#[derive(Default)]
pub struct MemoryCvStore {
    tables: Mutex<Tables>,
}

impl MemoryCvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cv(&self, user_id: Uuid, title: &str) -> Uuid {
        let id = Uuid::new_v4();
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        self.tables.lock().unwrap().cvs.push(CvRow {
            id,
            user_id,
            title: title.to_string(),
            summary: None,
            target_position: None,
            created_at: created,
            updated_at: created,
        });
        id
    }

    pub fn set_cv_details(&self, cv_id: Uuid, summary: Option<&str>, target: Option<&str>) {
        let mut tables = self.tables.lock().unwrap();
        let cv = tables.cvs.iter_mut().find(|c| c.id == cv_id).unwrap();
        cv.summary = summary.map(str::to_string);
        cv.target_position = target.map(str::to_string);
    }

    /// Adds a section at the next sort position of its CV.
    pub fn add_section(
        &self,
        cv_id: Uuid,
        section_type: &str,
        title: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let mut tables = self.tables.lock().unwrap();
        let sort_order = tables.sections.iter().filter(|s| s.cv_id == cv_id).count() as i32;
        tables.sections.push(CvSectionRow {
            id,
            cv_id,
            section_type: section_type.to_string(),
            title: title.to_string(),
            organization: None,
            start_date: start_date.map(str::to_string),
            end_date: end_date.map(str::to_string),
            location: None,
            link: None,
            sort_order,
            master_experience_id: None,
        });
        id
    }

    pub fn add_bullet(&self, section_id: Uuid, content: &str, sort_order: i32) -> Uuid {
        let id = Uuid::new_v4();
        self.tables.lock().unwrap().bullets.push(CvBulletRow {
            id,
            section_id,
            content: content.to_string(),
            sort_order,
            previous_content: None,
        });
        id
    }

    pub fn bullet(&self, bullet_id: Uuid) -> CvBulletRow {
        let tables = self.tables.lock().unwrap();
        tables.bullets.iter().find(|b| b.id == bullet_id).cloned().unwrap()
    }

    pub fn set_profile(&self, user_id: Uuid, first_name: &str, last_name: &str) {
        self.tables.lock().unwrap().profiles.push(ProfileRow {
            user_id,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            email: Some(format!("{}@example.com", first_name.to_lowercase())),
            ..Default::default()
        });
    }

    pub fn add_master(&self, user_id: Uuid, section_type: &str, title: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.tables.lock().unwrap().masters.push(MasterExperienceRow {
            id,
            user_id,
            section_type: section_type.to_string(),
            title: title.to_string(),
            organization: Some("Analytical Engines Ltd".to_string()),
            start_date: Some("2019-05-01".to_string()),
            end_date: None,
            location: None,
            link: None,
            sort_order: 0,
        });
        id
    }

    pub fn add_master_bullet(&self, master_id: Uuid, content: &str, sort_order: i32) {
        self.tables.lock().unwrap().master_bullets.push(MasterBulletRow {
            id: Uuid::new_v4(),
            master_experience_id: master_id,
            content: content.to_string(),
            sort_order,
        });
    }

    pub fn master_bullet_contents(&self, master_id: Uuid) -> Vec<String> {
        self.tables
            .lock()
            .unwrap()
            .master_bullets
            .iter()
            .filter(|b| b.master_experience_id == master_id)
            .map(|b| b.content.clone())
            .collect()
    }
}

#[async_trait]
impl CvStore for MemoryCvStore {
    async fn find_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<Option<CvRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .cvs
            .iter()
            .find(|c| c.id == cv_id && c.user_id == user_id)
            .cloned())
    }

    async fn list_sections(&self, user_id: Uuid, cv_id: Uuid) -> Result<Vec<CvSection>, AppError> {
        let tables = self.tables.lock().unwrap();
        if !tables.owns_cv(user_id, cv_id) {
            return Ok(Vec::new());
        }
        let mut sections: Vec<CvSectionRow> = tables
            .sections
            .iter()
            .filter(|s| s.cv_id == cv_id)
            .cloned()
            .collect();
        sections.sort_by_key(|s| s.sort_order);

        Ok(sections
            .into_iter()
            .map(|section| {
                let bullets = tables
                    .bullets
                    .iter()
                    .filter(|b| b.section_id == section.id)
                    .cloned()
                    .collect();
                CvSection { section, bullets }
            })
            .collect())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn find_master_experience(
        &self,
        user_id: Uuid,
        master_id: Uuid,
    ) -> Result<Option<MasterExperience>, AppError> {
        let tables = self.tables.lock().unwrap();
        let Some(experience) = tables
            .masters
            .iter()
            .find(|m| m.id == master_id && m.user_id == user_id)
            .cloned()
        else {
            return Ok(None);
        };
        let mut bullets: Vec<MasterBulletRow> = tables
            .master_bullets
            .iter()
            .filter(|b| b.master_experience_id == master_id)
            .cloned()
            .collect();
        bullets.sort_by_key(|b| b.sort_order);
        Ok(Some(MasterExperience {
            experience,
            bullets,
        }))
    }

    async fn insert_seeded_section(
        &self,
        user_id: Uuid,
        cv_id: Uuid,
        seed: &SectionSeed,
    ) -> Result<Option<CvSection>, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.owns_cv(user_id, cv_id) {
            return Ok(None);
        }
        let position = tables
            .sections
            .iter()
            .filter(|s| s.cv_id == cv_id)
            .map(|s| s.sort_order + 1)
            .max()
            .unwrap_or(0);

        let section = CvSectionRow {
            id: Uuid::new_v4(),
            cv_id,
            section_type: seed.section_type.clone(),
            title: seed.title.clone(),
            organization: seed.organization.clone(),
            start_date: seed.start_date.clone(),
            end_date: seed.end_date.clone(),
            location: seed.location.clone(),
            link: seed.link.clone(),
            sort_order: position,
            master_experience_id: Some(seed.master_experience_id),
        };
        let bullets: Vec<CvBulletRow> = seed
            .bullets
            .iter()
            .enumerate()
            .map(|(index, content)| CvBulletRow {
                id: Uuid::new_v4(),
                section_id: section.id,
                content: content.clone(),
                sort_order: index as i32,
                previous_content: None,
            })
            .collect();

        tables.sections.push(section.clone());
        tables.bullets.extend(bullets.iter().cloned());
        Ok(Some(CvSection { section, bullets }))
    }

    async fn update_bullet(
        &self,
        user_id: Uuid,
        bullet_id: Uuid,
        content: &str,
    ) -> Result<Option<CvBulletRow>, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.owns_bullet(user_id, bullet_id) {
            return Ok(None);
        }
        let Some(bullet) = tables.bullets.iter_mut().find(|b| b.id == bullet_id) else {
            return Ok(None);
        };
        if bullet.content != content {
            let replaced = std::mem::replace(&mut bullet.content, content.to_string());
            bullet.previous_content = Some(replaced);
        }
        Ok(Some(bullet.clone()))
    }
}
