use std::sync::Arc;

use crate::config::Config;
use crate::export::skills::SkillClassifier;
use crate::store::CvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CvStore>,
    /// Pluggable skill classifier. Default: KeywordSkillClassifier.
    pub skill_classifier: Arc<dyn SkillClassifier>,
    pub config: Config,
}
