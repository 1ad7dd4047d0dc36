use std::collections::HashMap;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::library::seeding::SectionSeed;
use crate::models::cv::{CvBulletRow, CvRow, CvSection, CvSectionRow};
use crate::models::library::{MasterBulletRow, MasterExperience, MasterExperienceRow};
use crate::models::profile::ProfileRow;
use crate::store::CvStore;

// Dates leave the database as `YYYY-MM-DD` whatever the session's DateStyle.
const SECTION_COLUMNS: &str = r#"
    s.id, s.cv_id, s.type, s.title, s.organization,
    to_char(s.start_date, 'YYYY-MM-DD') AS start_date,
    to_char(s.end_date, 'YYYY-MM-DD') AS end_date,
    s.location, s.link, s.sort_order, s.master_experience_id
"#;

const RETURNING_SECTION: &str = r#"
    id, cv_id, type, title, organization,
    to_char(start_date, 'YYYY-MM-DD') AS start_date,
    to_char(end_date, 'YYYY-MM-DD') AS end_date,
    location, link, sort_order, master_experience_id
"#;

const MASTER_COLUMNS: &str = r#"
    id, user_id, type, title, organization,
    to_char(start_date, 'YYYY-MM-DD') AS start_date,
    to_char(end_date, 'YYYY-MM-DD') AS end_date,
    location, link, sort_order
"#;

/// Postgres-backed store. Ownership is enforced in each query's WHERE clause.
#[derive(Clone)]
pub struct PgCvStore {
    pool: PgPool,
}

impl PgCvStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_section_rows(
        &self,
        user_id: Uuid,
        cv_id: Uuid,
    ) -> Result<Vec<CvSectionRow>, AppError> {
        let sql = format!(
            r#"
            SELECT {SECTION_COLUMNS}
            FROM cv_sections s
            JOIN cvs c ON c.id = s.cv_id
            WHERE s.cv_id = $1 AND c.user_id = $2
            ORDER BY s.sort_order ASC, s.id ASC
            "#
        );
        Ok(sqlx::query_as::<_, CvSectionRow>(&sql)
            .bind(cv_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn fetch_bullet_rows(
        &self,
        user_id: Uuid,
        cv_id: Uuid,
    ) -> Result<Vec<CvBulletRow>, AppError> {
        Ok(sqlx::query_as::<_, CvBulletRow>(
            r#"
            SELECT b.id, b.section_id, b.content, b.sort_order, b.previous_content
            FROM cv_bullets b
            JOIN cv_sections s ON s.id = b.section_id
            JOIN cvs c ON c.id = s.cv_id
            WHERE s.cv_id = $1 AND c.user_id = $2
            ORDER BY b.sort_order ASC, b.id ASC
            "#,
        )
        .bind(cv_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl CvStore for PgCvStore {
    async fn find_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<Option<CvRow>, AppError> {
        Ok(sqlx::query_as::<_, CvRow>(
            r#"
            SELECT id, user_id, title, summary, target_position, created_at, updated_at
            FROM cvs
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(cv_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_sections(&self, user_id: Uuid, cv_id: Uuid) -> Result<Vec<CvSection>, AppError> {
        let (sections, bullets) = tokio::try_join!(
            self.fetch_section_rows(user_id, cv_id),
            self.fetch_bullet_rows(user_id, cv_id),
        )?;

        let mut by_section: HashMap<Uuid, Vec<CvBulletRow>> = HashMap::new();
        for bullet in bullets {
            by_section.entry(bullet.section_id).or_default().push(bullet);
        }

        Ok(sections
            .into_iter()
            .map(|section| {
                let bullets = by_section.remove(&section.id).unwrap_or_default();
                CvSection { section, bullets }
            })
            .collect())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT user_id, first_name, last_name, email, phone, location,
                   linkedin_url, github_url, portfolio_url
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_master_experience(
        &self,
        user_id: Uuid,
        master_id: Uuid,
    ) -> Result<Option<MasterExperience>, AppError> {
        let sql = format!(
            r#"
            SELECT {MASTER_COLUMNS}
            FROM master_experiences
            WHERE id = $1 AND user_id = $2
            "#
        );
        let experience = sqlx::query_as::<_, MasterExperienceRow>(&sql)
            .bind(master_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(experience) = experience else {
            return Ok(None);
        };

        let bullets = sqlx::query_as::<_, MasterBulletRow>(
            r#"
            SELECT id, master_experience_id, content, sort_order
            FROM master_bullets
            WHERE master_experience_id = $1
            ORDER BY sort_order ASC, id ASC
            "#,
        )
        .bind(master_id)
        .fetch_all(&self.pool)
        .await?;

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
        let mut tx = self.pool.begin().await?;

        // Row lock keeps concurrent seeds from picking the same position.
        let owned: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM cvs WHERE id = $1 AND user_id = $2 FOR UPDATE")
                .bind(cv_id)
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;
        if owned.is_none() {
            return Ok(None);
        }

        let position: i32 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM cv_sections WHERE cv_id = $1",
        )
        .bind(cv_id)
        .fetch_one(&mut *tx)
        .await?;

        let sql = format!(
            r#"
            INSERT INTO cv_sections
                (id, cv_id, type, title, organization, start_date, end_date,
                 location, link, sort_order, master_experience_id)
            VALUES ($1, $2, $3, $4, $5, $6::date, $7::date, $8, $9, $10, $11)
            RETURNING {RETURNING_SECTION}
            "#
        );
        let section = sqlx::query_as::<_, CvSectionRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(cv_id)
            .bind(&seed.section_type)
            .bind(&seed.title)
            .bind(&seed.organization)
            .bind(&seed.start_date)
            .bind(&seed.end_date)
            .bind(&seed.location)
            .bind(&seed.link)
            .bind(position)
            .bind(seed.master_experience_id)
            .fetch_one(&mut *tx)
            .await?;

        let mut bullets = Vec::with_capacity(seed.bullets.len());
        for (index, content) in seed.bullets.iter().enumerate() {
            let bullet = sqlx::query_as::<_, CvBulletRow>(
                r#"
                INSERT INTO cv_bullets (id, section_id, content, sort_order)
                VALUES ($1, $2, $3, $4)
                RETURNING id, section_id, content, sort_order, previous_content
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(section.id)
            .bind(content)
            .bind(index as i32)
            .fetch_one(&mut *tx)
            .await?;
            bullets.push(bullet);
        }

        tx.commit()
            .await
            .with_context(|| format!("committing seeded section for CV {cv_id}"))?;

        Ok(Some(CvSection { section, bullets }))
    }

    async fn update_bullet(
        &self,
        user_id: Uuid,
        bullet_id: Uuid,
        content: &str,
    ) -> Result<Option<CvBulletRow>, AppError> {
        // SET expressions see the pre-update row, so the replaced text is
        // captured by the same statement that overwrites it.
        Ok(sqlx::query_as::<_, CvBulletRow>(
            r#"
            UPDATE cv_bullets b
            SET previous_content = CASE
                    WHEN b.content <> $1 THEN b.content
                    ELSE b.previous_content
                END,
                content = $1
            FROM cv_sections s
            JOIN cvs c ON c.id = s.cv_id
            WHERE b.id = $2 AND s.id = b.section_id AND c.user_id = $3
            RETURNING b.id, b.section_id, b.content, b.sort_order, b.previous_content
            "#,
        )
        .bind(content)
        .bind(bullet_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
