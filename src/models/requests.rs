use crate::core::SelectionSet;
use crate::models::domain::{CategoryBand, TimeSlot, TournamentCategory};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to classify a rating against one category band
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClassifyRequest {
    pub rating: f64,
    pub band: CategoryBand,
    /// Overrides the configured borderline buffer
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub buffer: Option<f64>,
}

/// Request to classify a rating against every category of a tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCategoriesRequest {
    pub rating: f64,
    #[validate(length(min = 1))]
    pub categories: Vec<TournamentCategory>,
}

/// Request for the slots of one tournament day
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DaySlotsRequest {
    pub day: NaiveDate,
    #[serde(alias = "tournamentStart")]
    pub tournament_start: NaiveDateTime,
    #[serde(alias = "tournamentEnd")]
    pub tournament_end: NaiveDateTime,
    #[validate(range(max = 23))]
    #[serde(default, alias = "hourStart")]
    pub hour_start: Option<u32>,
    #[validate(range(min = 1, max = 24))]
    #[serde(default, alias = "hourEnd")]
    pub hour_end: Option<u32>,
}

/// Request for the days of a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeRequest {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Request to toggle one slot of a selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleSlotRequest {
    #[serde(default)]
    pub selection: SelectionSet,
    pub slot: TimeSlot,
}

/// Request to select every available slot of a day
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DaySelectionRequest {
    #[serde(default)]
    pub selection: SelectionSet,
    pub day: NaiveDate,
    #[serde(alias = "tournamentStart")]
    pub tournament_start: NaiveDateTime,
    #[serde(alias = "tournamentEnd")]
    pub tournament_end: NaiveDateTime,
    #[validate(range(max = 23))]
    #[serde(default, alias = "hourStart")]
    pub hour_start: Option<u32>,
    #[validate(range(min = 1, max = 24))]
    #[serde(default, alias = "hourEnd")]
    pub hour_end: Option<u32>,
}

/// Request to clear a whole day of a selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeselectDayRequest {
    #[serde(default)]
    pub selection: SelectionSet,
    pub day: NaiveDate,
}

/// Path parameters of the onboarding endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OnboardingPath {
    #[validate(length(min = 1, max = 128))]
    pub session_id: String,
}
