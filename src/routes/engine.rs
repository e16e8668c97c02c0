use crate::core::{generate_date_range, Engine, SlotError, SlotGenerator};
use crate::models::{
    BusinessHours, CategoriesResponse, ClassifyRequest, DateRangeRequest, DateRangeResponse,
    DaySelectionRequest, DaySlotsRequest, DeselectDayRequest, ErrorResponse, ExperienceAssessment,
    HealthResponse, RankCategoriesRequest, RatingResponse, SelectionResponse, SlotsResponse,
    ToggleSlotRequest, VerdictResponse,
};
use crate::services::{OnboardingStore, RatingCache};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Engine,
    pub rating_cache: RatingCache,
    pub onboarding: OnboardingStore,
}

/// Configure rating, eligibility and slot routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/rating/estimate", web::post().to(estimate_rating))
        .route("/eligibility/classify", web::post().to(classify_rating))
        .route("/eligibility/categories", web::post().to(rank_categories))
        .route("/slots/day", web::post().to(day_slots))
        .route("/slots/range", web::post().to(date_range))
        .route("/slots/selection/toggle", web::post().to(toggle_slot))
        .route("/slots/selection/select-day", web::post().to(select_day))
        .route("/slots/selection/deselect-day", web::post().to(deselect_day));
}

pub(crate) fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Request hours fall back to the configured business hours
fn resolve_hours(
    engine: &Engine,
    hour_start: Option<u32>,
    hour_end: Option<u32>,
) -> Result<BusinessHours, SlotError> {
    let defaults = engine.params().hours;
    BusinessHours::new(
        hour_start.unwrap_or(defaults.start()),
        hour_end.unwrap_or(defaults.end()),
    )
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.rating_cache.stats();
    tracing::debug!("Rating cache: {} entries, hit rate {:.2}", stats.size, stats.hit_rate);

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Estimate a rating from onboarding answers
///
/// POST /api/v1/rating/estimate
///
/// Request body (every field optional):
/// ```json
/// {
///   "yearsPlaying": 3,
///   "previousSports": ["tennis"],
///   "selfAssessedSkill": 3,
///   "playingFrequency": "weekly",
///   "competitiveExperience": false,
///   "tournamentParticipation": true,
///   "coachingExperience": false
/// }
/// ```
async fn estimate_rating(
    state: web::Data<AppState>,
    req: web::Json<ExperienceAssessment>,
) -> impl Responder {
    let rating = state.rating_cache.estimate(&req).await;
    tracing::info!("Estimated rating {:.1}", rating.value());
    HttpResponse::Ok().json(RatingResponse { rating })
}

/// Classify a rating against a category band
///
/// POST /api/v1/eligibility/classify
///
/// Request body:
/// ```json
/// { "rating": 2.4, "band": { "min_elo": 2.5, "max_elo": 3.5 }, "buffer": 0.2 }
/// ```
async fn classify_rating(
    state: web::Data<AppState>,
    req: web::Json<ClassifyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for classify request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let buffer = req
        .buffer
        .unwrap_or(state.engine.params().borderline_buffer);

    match state
        .engine
        .classify_with_buffer(req.rating, &req.band, buffer)
    {
        Ok(verdict) => HttpResponse::Ok().json(VerdictResponse {
            verdict,
            can_register: verdict.can_register(),
        }),
        Err(e) => {
            tracing::warn!("Rejected classification: {}", e);
            bad_request("Invalid category band", e.to_string())
        }
    }
}

/// Classify a rating against every category of a tournament
///
/// POST /api/v1/eligibility/categories
async fn rank_categories(
    state: web::Data<AppState>,
    req: web::Json<RankCategoriesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for categories request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    match state.engine.rank_categories(req.rating, &req.categories) {
        Ok(categories) => HttpResponse::Ok().json(CategoriesResponse {
            total_results: categories.len(),
            categories,
        }),
        Err(e) => {
            tracing::warn!("Rejected category ranking: {}", e);
            bad_request("Invalid category band", e.to_string())
        }
    }
}

/// Slots of one tournament day
///
/// POST /api/v1/slots/day
///
/// Request body:
/// ```json
/// {
///   "day": "2025-06-14",
///   "tournament_start": "2025-06-14T00:00:00",
///   "tournament_end": "2025-06-15T00:00:00",
///   "hour_start": 8,
///   "hour_end": 22
/// }
/// ```
async fn day_slots(state: web::Data<AppState>, req: web::Json<DaySlotsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for day slots request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let hours = match resolve_hours(&state.engine, req.hour_start, req.hour_end) {
        Ok(hours) => hours,
        Err(e) => return bad_request("Invalid business hours", e.to_string()),
    };

    let slots = SlotGenerator::new(req.tournament_start, req.tournament_end, hours).day_slots(req.day);

    tracing::info!("Generated {} slots for {}", slots.len(), req.day);

    HttpResponse::Ok().json(SlotsResponse {
        total_results: slots.len(),
        slots,
    })
}

/// Days of a date range, one per 24 hours
///
/// POST /api/v1/slots/range
async fn date_range(req: web::Json<DateRangeRequest>) -> impl Responder {
    HttpResponse::Ok().json(DateRangeResponse {
        dates: generate_date_range(req.start, req.end),
    })
}

/// Toggle one slot of a selection
///
/// POST /api/v1/slots/selection/toggle
async fn toggle_slot(req: web::Json<ToggleSlotRequest>) -> impl Responder {
    let ToggleSlotRequest {
        mut selection,
        slot,
    } = req.into_inner();

    let selected = selection.toggle(slot);
    tracing::debug!("Toggled slot {} (selected: {})", slot.start_time, selected);

    HttpResponse::Ok().json(SelectionResponse {
        total_selected: selection.len(),
        selection,
    })
}

/// Select every available slot of a day
///
/// POST /api/v1/slots/selection/select-day
async fn select_day(
    state: web::Data<AppState>,
    req: web::Json<DaySelectionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for select-day request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let hours = match resolve_hours(&state.engine, req.hour_start, req.hour_end) {
        Ok(hours) => hours,
        Err(e) => return bad_request("Invalid business hours", e.to_string()),
    };

    let DaySelectionRequest {
        mut selection,
        day,
        tournament_start,
        tournament_end,
        ..
    } = req.into_inner();

    let generator = SlotGenerator::new(tournament_start, tournament_end, hours);
    let selected = selection.select_all_for_day(day, &generator);
    tracing::debug!("Selected {} slots on {}", selected, day);

    HttpResponse::Ok().json(SelectionResponse {
        total_selected: selection.len(),
        selection,
    })
}

/// Clear every selected slot of a day
///
/// POST /api/v1/slots/selection/deselect-day
///
/// Request body:
/// ```json
/// { "selection": [], "day": "2025-06-14" }
/// ```
async fn deselect_day(req: web::Json<DeselectDayRequest>) -> impl Responder {
    let DeselectDayRequest { mut selection, day } = req.into_inner();

    let removed = selection.deselect_all_for_day(day);
    tracing::debug!("Deselected {} slots on {}", removed, day);

    HttpResponse::Ok().json(SelectionResponse {
        total_selected: selection.len(),
        selection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hours_uses_defaults() {
        let engine = Engine::with_default_params();

        let hours = resolve_hours(&engine, None, None).unwrap();
        assert_eq!((hours.start(), hours.end()), (8, 22));

        let hours = resolve_hours(&engine, Some(10), None).unwrap();
        assert_eq!((hours.start(), hours.end()), (10, 22));

        assert!(resolve_hours(&engine, Some(23), None).is_err());
    }
}
