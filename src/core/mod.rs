// Core exports
pub mod filters;
pub mod fixtures;
pub mod search;
pub mod theme;

pub use filters::{matches_all, matches_experience, matches_location, matches_salary, matches_text, parse_salary_floor};
pub use search::{filter_candidates, CandidateFilter, SearchResult};
pub use theme::ThemeStore;
