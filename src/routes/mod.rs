// Route exports
pub mod engine;
pub mod onboarding;

pub use engine::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(engine::configure)
            .configure(onboarding::configure),
    );
}
