use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::fixtures;
use crate::models::{LandingView, SearchCandidatesRequest, SearchView};
use crate::routes::errors::{invalid_criteria, validation_failed};
use crate::routes::AppState;

const PRODUCT: &str = "TalentHub AI";
const HEADLINE: &str = "Find Top Talent with AI Power";
const TAGLINE: &str = "Upload resumes or search candidates using our advanced semantic search engine.";

/// Configure the two screens
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(landing))
        .route("/search", web::get().to(search));
}

/// Landing screen
async fn landing(state: web::Data<AppState>) -> impl Responder {
    let accepted_extensions = state
        .intake
        .options()
        .allowed_extensions
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect();

    HttpResponse::Ok().json(LandingView {
        product: PRODUCT.to_string(),
        headline: HEADLINE.to_string(),
        tagline: TAGLINE.to_string(),
        theme: state.theme.current(),
        stats: fixtures::dashboard_stats(),
        uploads: state.intake.snapshot(),
        accepted_extensions,
    })
}

/// Search screen
async fn search(
    state: web::Data<AppState>,
    req: web::Query<SearchCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let criteria = match req.criteria() {
        Ok(criteria) => criteria,
        Err(e) => return invalid_criteria(&e),
    };

    let result = state.candidates.search(&req.q, &criteria);
    let total = result.candidates.len();

    HttpResponse::Ok().json(SearchView {
        theme: state.theme.current(),
        query: req.into_inner().q,
        criteria,
        options: fixtures::filter_options(),
        no_results: total == 0,
        candidates: result.candidates,
        total,
    })
}
