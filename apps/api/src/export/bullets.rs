use uuid::Uuid;

use crate::export::document::ExportBullet;
use crate::models::cv::CvBulletRow;

/// Orders a section's bullets by sort position and drops blank ones.
///
/// Ids are assigned from the sorted position *before* blanks are removed, so a
/// blank bullet never renumbers the bullets after it. The sort is stable.
pub fn project_bullets(section_id: Uuid, bullets: &[CvBulletRow]) -> Vec<ExportBullet> {
    let mut ordered: Vec<&CvBulletRow> = bullets.iter().collect();
    ordered.sort_by_key(|b| b.sort_order);

    ordered
        .into_iter()
        .enumerate()
        .filter(|(_, b)| !b.content.trim().is_empty())
        .map(|(index, b)| ExportBullet {
            id: format!("{section_id}-bullet-{index}"),
            content: b.content.clone(),
        })
        .collect()
}
