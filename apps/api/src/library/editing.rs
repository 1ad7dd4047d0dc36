//! Bullet edits with a single level of previous content.

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::CvBulletRow;
use crate::store::CvStore;

/// Blank or whitespace-only content is rejected.
pub fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    Ok(())
}

/// Applies an edit to one of the caller's CV bullets and returns the stored row.
///
/// The store records the replaced text as `previous_content` in the same write,
/// so concurrent edits never leave a stale value behind. Re-sending the stored
/// text keeps the existing `previous_content`.
pub async fn edit_bullet(
    store: &dyn CvStore,
    user_id: Uuid,
    bullet_id: Uuid,
    content: &str,
) -> Result<CvBulletRow, AppError> {
    validate_content(content)?;

    let updated = store
        .update_bullet(user_id, bullet_id, content)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bullet {bullet_id} not found")))?;

    info!("Edited bullet {bullet_id} in section {}", updated.section_id);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryCvStore;

    fn owned_bullet(store: &MemoryCvStore, content: &str) -> (Uuid, Uuid) {
        let user = Uuid::new_v4();
        let cv = store.add_cv(user, "CV");
        let section = store.add_section(cv, "Experience", "Engineer", None, None);
        (user, store.add_bullet(section, content, 0))
    }

    #[test]
    fn test_blank_content_rejected() {
        for content in ["", "   ", "  \n\t"] {
            let err = validate_content(content).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{content:?}");
        }
        assert!(validate_content(" Built APIs ").is_ok());
    }

    #[tokio::test]
    async fn test_change_records_previous_content() {
        let store = MemoryCvStore::new();
        let (user, bullet) = owned_bullet(&store, "Built APIs");

        let updated = edit_bullet(&store, user, bullet, "Built 12 REST APIs").await.unwrap();
        assert_eq!(updated.content, "Built 12 REST APIs");
        assert_eq!(updated.previous_content.as_deref(), Some("Built APIs"));
    }

    #[tokio::test]
    async fn test_blank_edit_leaves_bullet_untouched() {
        let store = MemoryCvStore::new();
        let (user, bullet) = owned_bullet(&store, "Built APIs");

        let err = edit_bullet(&store, user, bullet, "   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let stored = store.bullet(bullet);
        assert_eq!(stored.content, "Built APIs");
        assert_eq!(stored.previous_content, None);
    }

    #[tokio::test]
    async fn test_concurrent_edits_record_the_replaced_text() {
        let store = MemoryCvStore::new();
        let (user, bullet) = owned_bullet(&store, "v1");

        let (a, b) = tokio::join!(
            edit_bullet(&store, user, bullet, "v2a"),
            edit_bullet(&store, user, bullet, "v2b"),
        );
        let (a, b) = (a.unwrap(), b.unwrap());
        // Whichever write lands second must see the first one's text as its previous content.
        let (first, second) = if b.previous_content.as_deref() == Some("v2a") {
            (a, b)
        } else {
            (b, a)
        };
        assert_eq!(first.previous_content.as_deref(), Some("v1"));
        assert_eq!(second.previous_content.as_deref(), Some(first.content.as_str()));
        assert_eq!(store.bullet(bullet).content, second.content);
    }

    #[tokio::test]
    async fn test_edit_bullet_keeps_only_latest_previous() {
        let store = MemoryCvStore::new();
        let user = Uuid::new_v4();
        let cv = store.add_cv(user, "CV");
        let section = store.add_section(cv, "Experience", "Engineer", None, None);
        let bullet = store.add_bullet(section, "v1", 0);

        edit_bullet(&store, user, bullet, "v2").await.unwrap();
        let updated = edit_bullet(&store, user, bullet, "v3").await.unwrap();

        assert_eq!(updated.content, "v3");
        assert_eq!(updated.previous_content.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_noop_edit_preserves_previous_content() {
        let store = MemoryCvStore::new();
        let user = Uuid::new_v4();
        let cv = store.add_cv(user, "CV");
        let section = store.add_section(cv, "Experience", "Engineer", None, None);
        let bullet = store.add_bullet(section, "v1", 0);

        edit_bullet(&store, user, bullet, "v2").await.unwrap();
        let same = edit_bullet(&store, user, bullet, "v2").await.unwrap();
        assert_eq!(same.previous_content.as_deref(), Some("v1"));
    }

    #[tokio::test]
    async fn test_foreign_bullet_is_not_found() {
        let store = MemoryCvStore::new();
        let owner = Uuid::new_v4();
        let cv = store.add_cv(owner, "CV");
        let section = store.add_section(cv, "Experience", "Engineer", None, None);
        let bullet = store.add_bullet(section, "v1", 0);

        let err = edit_bullet(&store, Uuid::new_v4(), bullet, "hijacked").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
