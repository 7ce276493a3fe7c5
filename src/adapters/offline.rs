//! Narrative adapter for deployments without a text generator.

use crate::app::ports::{NarrativeError, NarrativePort};
use crate::narrative::NarrativeRequest;

/// Always reports [`NarrativeError::Unavailable`], so the service uses its
/// deterministic fallback recommendations.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineNarrative;

impl NarrativePort for OfflineNarrative {
    async fn recommend(
        &self,
        _request: &NarrativeRequest<'_>,
    ) -> Result<Vec<String>, NarrativeError> {
        Err(NarrativeError::Unavailable)
    }
}
