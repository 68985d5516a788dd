use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::fixtures;
use crate::models::{
    HealthResponse, SearchCandidatesRequest, SearchCandidatesResponse, StatsResponse,
    SubmitFilesRequest, SubmitFilesResponse, ThemeResponse,
};
use crate::routes::errors::{intake_rejected, invalid_criteria, validation_failed};
use crate::routes::AppState;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/candidates", web::get().to(search_candidates))
        .route("/theme", web::get().to(get_theme))
        .route("/theme/toggle", web::post().to(toggle_theme))
        .route("/uploads", web::get().to(get_uploads))
        .route("/uploads", web::post().to(submit_files))
        .route("/stats", web::get().to(get_stats));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search candidates endpoint
///
/// GET /api/v1/candidates?q=react&experience=5&location=Austin&salaryRange=100k%2B
async fn search_candidates(
    state: web::Data<AppState>,
    req: web::Query<SearchCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for candidate search: {:?}", errors);
        return validation_failed(&errors);
    }

    let criteria = match req.criteria() {
        Ok(criteria) => criteria,
        Err(e) => return invalid_criteria(&e),
    };

    let result = state.candidates.search(&req.q, &criteria);
    let total = result.candidates.len();

    tracing::info!(
        "Candidate search returned {} of {} candidates",
        total,
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchCandidatesResponse {
        candidates: result.candidates,
        total,
    })
}

async fn get_theme(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ThemeResponse {
        theme: state.theme.current(),
    })
}

async fn toggle_theme(state: web::Data<AppState>) -> impl Responder {
    let theme = state.theme.toggle();
    tracing::info!("Theme switched to {}", theme);
    HttpResponse::Ok().json(ThemeResponse { theme })
}

async fn get_uploads(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.intake.snapshot())
}

/// Submit files endpoint
///
/// POST /api/v1/uploads
///
/// Request body:
/// ```json
/// {
///   "files": ["resume.pdf"],
///   "mode": "single|batch"
/// }
/// ```
///
/// Answers 202 while the simulated upload runs in the background, or 200 when
/// the submission was empty.
async fn submit_files(
    state: web::Data<AppState>,
    req: web::Json<SubmitFilesRequest>,
) -> impl Responder {
    let SubmitFilesRequest { files, mode } = req.into_inner();
    let accepted = files.clone();

    match state.intake.begin(files, mode) {
        Ok(Some(pending)) => {
            let submission_id = pending.id();
            actix_web::rt::spawn(pending.complete());

            HttpResponse::Accepted().json(SubmitFilesResponse {
                submission_id: Some(submission_id),
                accepted,
                status: state.intake.snapshot(),
            })
        }
        Ok(None) => HttpResponse::Ok().json(SubmitFilesResponse {
            submission_id: None,
            accepted,
            status: state.intake.snapshot(),
        }),
        Err(e) => {
            tracing::warn!("Rejected upload of {} file(s): {}", accepted.len(), e);
            intake_rejected(&e)
        }
    }
}

async fn get_stats() -> impl Responder {
    HttpResponse::Ok().json(StatsResponse {
        stats: fixtures::dashboard_stats(),
    })
}
