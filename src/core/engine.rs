use crate::core::{
    eligibility::{classify, rank_categories, EligibilityError},
    rating::estimate_rating,
    slots::SlotGenerator,
};
use crate::models::{
    CategoryBand, CategoryVerdict, EligibilityVerdict, EngineParams, ExperienceAssessment,
    SkillRating, TournamentCategory,
};
use chrono::NaiveDateTime;

/// Entry point the screens talk to
///
/// Holds the configured borderline buffer and business hours so callers only
/// pass the data that changes per call. Every method is pure.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    params: EngineParams,
}

impl Engine {
    pub fn new(params: EngineParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: EngineParams::default(),
        }
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn estimate(&self, experience: &ExperienceAssessment) -> SkillRating {
        estimate_rating(experience)
    }

    /// Classify with the configured buffer
    pub fn classify(
        &self,
        rating: f64,
        band: &CategoryBand,
    ) -> Result<EligibilityVerdict, EligibilityError> {
        classify(rating, band, self.params.borderline_buffer)
    }

    pub fn classify_with_buffer(
        &self,
        rating: f64,
        band: &CategoryBand,
        buffer: f64,
    ) -> Result<EligibilityVerdict, EligibilityError> {
        classify(rating, band, buffer)
    }

    /// Verdicts for each category of a tournament, best first
    pub fn rank_categories(
        &self,
        rating: f64,
        categories: &[TournamentCategory],
    ) -> Result<Vec<CategoryVerdict>, EligibilityError> {
        let verdicts = rank_categories(rating, categories, self.params.borderline_buffer)?;

        tracing::debug!(
            "Ranked {} categories for rating {:.1} ({} open for registration)",
            verdicts.len(),
            rating,
            verdicts.iter().filter(|v| v.can_register).count()
        );

        Ok(verdicts)
    }

    /// Slot grid for a tournament window using the configured business hours
    pub fn slot_generator(
        &self,
        tournament_start: NaiveDateTime,
        tournament_end: NaiveDateTime,
    ) -> SlotGenerator {
        SlotGenerator::new(tournament_start, tournament_end, self.params.hours)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_default_params()
    }
}
