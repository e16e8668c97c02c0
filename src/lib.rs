//! Padel Engine - rating estimation, tournament eligibility and time-slot selection
//!
//! This library holds the pure logic shared by the onboarding, tournament
//! browsing and tournament creation screens of the padel club app:
//! - estimating a starting skill rating from an experience questionnaire
//! - classifying a rating against a category band (eligible / borderline / ineligible)
//! - generating hourly tournament slots and editing a selection of them

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    classify, estimate_rating, generate_date_range, generate_day_slots, Engine, SelectionSet,
    SlotGenerator,
};
pub use crate::models::{
    CategoryBand, EligibilityVerdict, ExperienceAssessment, PlayingFrequency, SkillRating, TimeSlot,
};
