use crate::core::Engine;
use crate::models::{ExperienceAssessment, SkillRating};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Memoizes rating estimates on assessment equality
///
/// Estimation is pure, so a cached value is always correct; the cache only
/// saves recomputation while onboarding screens re-render on every keystroke.
#[derive(Clone)]
pub struct RatingCache {
    engine: Engine,
    entries: moka::future::Cache<ExperienceAssessment, SkillRating>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl RatingCache {
    pub fn new(engine: Engine, capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            engine,
            entries,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Return the cached estimate or compute and store it
    pub async fn estimate(&self, experience: &ExperienceAssessment) -> SkillRating {
        if let Some(rating) = self.entries.get(experience).await {
            tracing::trace!("Rating cache hit");
            self.hits.fetch_add(1, Ordering::Relaxed);
            return rating;
        }

        tracing::trace!("Rating cache miss");
        self.misses.fetch_add(1, Ordering::Relaxed);

        let rating = self.engine.estimate(experience);
        self.entries.insert(experience.clone(), rating).await;
        rating
    }

    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let lookups = hits + misses;

        CacheStats {
            size: self.entries.entry_count(),
            hit_count: hits,
            miss_count: misses,
            hit_rate: if lookups > 0 {
                hits as f64 / lookups as f64
            } else {
                0.0
            },
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub size: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub hit_rate: f64,
}
