use serde::{Deserialize, Serialize};

use crate::models::domain::{Candidate, DashboardStat, FilterCriteria, FilterOptions, IntakeSnapshot, Theme};

/// Response for the candidate search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidatesResponse {
    pub candidates: Vec<Candidate>,
    pub total: usize,
}

/// Landing screen: hero copy, stats and upload state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingView {
    pub product: String,
    pub headline: String,
    pub tagline: String,
    pub theme: Theme,
    pub stats: Vec<DashboardStat>,
    pub uploads: IntakeSnapshot,
    #[serde(rename = "acceptedExtensions")]
    pub accepted_extensions: Vec<String>,
}

/// Search screen: results plus the filter choices and what was applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchView {
    pub theme: Theme,
    pub query: String,
    pub criteria: FilterCriteria,
    pub options: FilterOptions,
    pub candidates: Vec<Candidate>,
    pub total: usize,
    #[serde(rename = "noResults")]
    pub no_results: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// Intake receipt; `submissionId` is absent when nothing was submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFilesResponse {
    #[serde(rename = "submissionId")]
    pub submission_id: Option<uuid::Uuid>,
    pub accepted: Vec<String>,
    pub status: IntakeSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stats: Vec<DashboardStat>,
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
