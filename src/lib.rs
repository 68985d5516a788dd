//! TalentHub - candidate search and resume intake service
//!
//! This library provides the candidate filter behind the search screen, the
//! simulated resume intake used by the landing screen, and the theme setting
//! shared by both, plus the actix-web routes exposing them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_candidates, CandidateFilter, ThemeStore};
pub use models::{Candidate, FilterCriteria, SalaryThreshold, Theme, UploadMode};
pub use routes::AppState;
pub use services::FileIntake;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let filter = CandidateFilter::default();
        assert_eq!(filter.candidates().len(), 5);
        assert_eq!(ThemeStore::default().current(), Theme::Light);
    }
}
