use crate::models::{ErrorResponse, ExperienceAssessment, OnboardingPath, RatingResponse};
use crate::routes::engine::{bad_request, AppState};
use crate::services::OnboardingError;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure onboarding draft routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/onboarding/{session_id}")
            .route(web::put().to(save_draft))
            .route(web::get().to(load_draft))
            .route(web::delete().to(clear_draft)),
    );
}

/// Save onboarding answers and return the rating they currently estimate to
///
/// PUT /api/v1/onboarding/{session_id}
async fn save_draft(
    state: web::Data<AppState>,
    path: web::Path<OnboardingPath>,
    req: web::Json<ExperienceAssessment>,
) -> impl Responder {
    if let Err(errors) = path.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    if let Err(e) = state.onboarding.save(&path.session_id, &req).await {
        tracing::error!("Failed to save onboarding draft {}: {}", path.session_id, e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to save onboarding draft".to_string(),
            message: e.to_string(),
            status_code: 500,
        });
    }

    let rating = state.rating_cache.estimate(&req).await;
    HttpResponse::Ok().json(RatingResponse { rating })
}

/// Load the saved onboarding answers
///
/// GET /api/v1/onboarding/{session_id}
async fn load_draft(
    state: web::Data<AppState>,
    path: web::Path<OnboardingPath>,
) -> impl Responder {
    if let Err(errors) = path.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    match state.onboarding.load(&path.session_id).await {
        Ok(experience) => HttpResponse::Ok().json(experience),
        Err(e @ OnboardingError::NotFound(_)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Onboarding draft not found".to_string(),
            message: e.to_string(),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to load onboarding draft {}: {}", path.session_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load onboarding draft".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Discard the saved onboarding answers
///
/// DELETE /api/v1/onboarding/{session_id}
async fn clear_draft(
    state: web::Data<AppState>,
    path: web::Path<OnboardingPath>,
) -> impl Responder {
    if let Err(errors) = path.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    state.onboarding.clear(&path.session_id).await;
    HttpResponse::NoContent().finish()
}
