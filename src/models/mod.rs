// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BusinessHours, CategoryBand, CategoryVerdict, EligibilityVerdict, EngineParams,
    ExperienceAssessment, PlayingFrequency, SkillRating, TimeSlot, TournamentCategory,
};
pub use requests::{
    ClassifyRequest, DateRangeRequest, DaySelectionRequest, DaySlotsRequest, DeselectDayRequest,
    OnboardingPath, RankCategoriesRequest, ToggleSlotRequest,
};
pub use responses::{
    CategoriesResponse, DateRangeResponse, ErrorResponse, HealthResponse, RatingResponse,
    SelectionResponse, SlotsResponse, VerdictResponse,
};
