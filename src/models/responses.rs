use crate::core::SelectionSet;
use crate::models::domain::{CategoryVerdict, EligibilityVerdict, SkillRating, TimeSlot};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Response for the rating estimate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResponse {
    pub rating: SkillRating,
}

/// Response for the single-band classification endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictResponse {
    pub verdict: EligibilityVerdict,
    #[serde(rename = "canRegister")]
    pub can_register: bool,
}

/// Response for the tournament categories endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryVerdict>,
    pub total_results: usize,
}

/// Response listing generated slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub slots: Vec<TimeSlot>,
    pub total_results: usize,
}

/// Response listing the days of a range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeResponse {
    pub dates: Vec<NaiveDateTime>,
}

/// Response carrying an updated selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub selection: SelectionSet,
    pub total_selected: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
