// Service exports
pub mod cache;
pub mod onboarding;

pub use cache::{CacheStats, RatingCache};
pub use onboarding::{decode_snapshot, encode_snapshot, OnboardingError, OnboardingStore};
