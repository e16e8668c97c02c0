use crate::models::ExperienceAssessment;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with onboarding drafts
#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("No onboarding draft for session: {0}")]
    NotFound(String),
}

/// Freeze an assessment into an immutable JSON snapshot
pub fn encode_snapshot(experience: &ExperienceAssessment) -> Result<Vec<u8>, OnboardingError> {
    Ok(serde_json::to_vec(experience)?)
}

/// Restore an assessment from a snapshot produced by [`encode_snapshot`]
pub fn decode_snapshot(bytes: &[u8]) -> Result<ExperienceAssessment, OnboardingError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// In-progress onboarding answers, keyed by session
///
/// Drafts expire after the configured TTL; the engine itself never reads from
/// here, callers load a draft and pass it to the estimator explicitly.
#[derive(Clone)]
pub struct OnboardingStore {
    drafts: moka::future::Cache<String, Vec<u8>>,
}

impl OnboardingStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let drafts = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { drafts }
    }

    /// Save (or overwrite) the draft for a session
    pub async fn save(
        &self,
        session_id: &str,
        experience: &ExperienceAssessment,
    ) -> Result<(), OnboardingError> {
        let snapshot = encode_snapshot(experience)?;
        self.drafts.insert(session_id.to_string(), snapshot).await;
        tracing::debug!("Saved onboarding draft: {}", session_id);
        Ok(())
    }

    pub async fn load(&self, session_id: &str) -> Result<ExperienceAssessment, OnboardingError> {
        match self.drafts.get(session_id).await {
            Some(bytes) => decode_snapshot(&bytes),
            None => Err(OnboardingError::NotFound(session_id.to_string())),
        }
    }

    /// Drop the draft for a session; clearing a missing draft is not an error
    pub async fn clear(&self, session_id: &str) {
        self.drafts.invalidate(session_id).await;
        tracing::debug!("Cleared onboarding draft: {}", session_id);
    }
}
