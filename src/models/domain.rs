use crate::core::slots::SlotError;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// How often a player gets on court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayingFrequency {
    Rarely,
    Monthly,
    Weekly,
    Daily,
}

/// Self-reported experience collected during onboarding
///
/// Every field may be missing; a missing field contributes nothing to the
/// estimated rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperienceAssessment {
    #[serde(rename = "yearsPlaying", alias = "years_playing", default)]
    pub years_playing: Option<u32>,
    #[serde(rename = "previousSports", alias = "previous_sports", default)]
    pub previous_sports: Vec<String>,
    #[serde(rename = "selfAssessedSkill", alias = "self_assessed_skill", default)]
    pub self_assessed_skill: Option<u8>,
    #[serde(rename = "playingFrequency", alias = "playing_frequency", default)]
    pub playing_frequency: Option<PlayingFrequency>,
    #[serde(
        rename = "competitiveExperience",
        alias = "competitive_experience",
        default,
        deserialize_with = "null_as_false"
    )]
    pub competitive_experience: bool,
    #[serde(
        rename = "tournamentParticipation",
        alias = "tournament_participation",
        default,
        deserialize_with = "null_as_false"
    )]
    pub tournament_participation: bool,
    #[serde(
        rename = "coachingExperience",
        alias = "coaching_experience",
        default,
        deserialize_with = "null_as_false"
    )]
    pub coaching_experience: bool,
}

/// An unanswered yes/no question may arrive as `null`
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Estimated skill rating
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillRating(f64);

impl SkillRating {
    pub const FLOOR: f64 = 1.0;
    pub const CEILING: f64 = 4.5;

    /// Clamp into `[FLOOR, CEILING]` and round to one decimal place
    pub fn from_raw(raw: f64) -> Self {
        let clamped = raw.clamp(Self::FLOOR, Self::CEILING);
        Self((clamped * 10.0).round() / 10.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<SkillRating> for f64 {
    fn from(rating: SkillRating) -> Self {
        rating.0
    }
}

/// Rating band of a tournament category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBand {
    pub min_elo: f64,
    /// Missing or null upper bound means the category is open-ended
    #[serde(default = "unbounded", with = "open_bound")]
    pub max_elo: f64,
}

fn unbounded() -> f64 {
    f64::INFINITY
}

/// JSON has no infinity, so an open upper bound travels as `null`
mod open_bound {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *value == f64::INFINITY {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl CategoryBand {
    pub fn new(min_elo: f64, max_elo: f64) -> Self {
        Self { min_elo, max_elo }
    }

    pub fn open_ended(min_elo: f64) -> Self {
        Self {
            min_elo,
            max_elo: f64::INFINITY,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.min_elo.is_nan() && !self.max_elo.is_nan() && self.min_elo <= self.max_elo
    }
}

/// A named category as shown on the tournament browsing screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentCategory {
    pub name: String,
    #[serde(flatten)]
    pub band: CategoryBand,
}

/// Outcome of checking a rating against a category band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityVerdict {
    Eligible,
    Borderline,
    Ineligible,
}

impl EligibilityVerdict {
    /// Registration is offered for eligible and borderline players
    pub fn can_register(self) -> bool {
        !matches!(self, EligibilityVerdict::Ineligible)
    }

    /// Rank for ordering (lower is better)
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            EligibilityVerdict::Eligible => 0,
            EligibilityVerdict::Borderline => 1,
            EligibilityVerdict::Ineligible => 2,
        }
    }
}

/// Verdict for one category of a tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryVerdict {
    pub category: TournamentCategory,
    pub verdict: EligibilityVerdict,
    #[serde(rename = "canRegister")]
    pub can_register: bool,
}

/// Opening hours used to build the daily slot grid, `[start, end)` in whole hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    start: u32,
    end: u32,
}

impl BusinessHours {
    pub const DEFAULT_START: u32 = 8;
    pub const DEFAULT_END: u32 = 22;

    pub fn new(start: u32, end: u32) -> Result<Self, SlotError> {
        if start >= end || end > 24 {
            return Err(SlotError::InvalidHours { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
        }
    }
}

/// One bookable hour of a tournament
///
/// Two slots are the same slot when their `(start_time, end_time)` pair matches;
/// `day_of_week` and `hour` are derived from the start and take no part in identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Monday = 0
    pub day_of_week: u8,
    pub hour: u8,
}

impl TimeSlot {
    /// Build the one-hour slot beginning at `start_time`
    ///
    /// # Panics
    ///
    /// Panics if the slot would end past `NaiveDateTime::MAX`; see
    /// [`TimeSlot::checked_starting_at`].
    pub fn starting_at(start_time: NaiveDateTime) -> Self {
        Self::from_bounds(start_time, start_time + Duration::hours(1))
    }

    /// Like [`TimeSlot::starting_at`], `None` when the end is not representable
    pub fn checked_starting_at(start_time: NaiveDateTime) -> Option<Self> {
        start_time
            .checked_add_signed(Duration::hours(1))
            .map(|end_time| Self::from_bounds(start_time, end_time))
    }

    fn from_bounds(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time,
            day_of_week: start_time.weekday().num_days_from_monday() as u8,
            hour: start_time.hour() as u8,
        }
    }

    pub fn identity(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start_time, self.end_time)
    }

    pub fn day(&self) -> NaiveDate {
        self.start_time.date()
    }
}

impl PartialEq for TimeSlot {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for TimeSlot {}

impl Hash for TimeSlot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for TimeSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

/// Parameters the engine runs with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    pub borderline_buffer: f64,
    pub hours: BusinessHours,
}

impl EngineParams {
    pub const DEFAULT_BUFFER: f64 = 0.2;
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            borderline_buffer: Self::DEFAULT_BUFFER,
            hours: BusinessHours::default(),
        }
    }
}
