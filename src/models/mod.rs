// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, CriteriaError, DashboardStat, FilterCriteria, FilterOption, FilterOptions,
    IntakeSnapshot, SalaryThreshold, Theme, UploadMode,
};
pub use requests::{SearchCandidatesRequest, SubmitFilesRequest};
pub use responses::{
    ErrorResponse, HealthResponse, LandingView, SearchCandidatesResponse, SearchView,
    StatsResponse, SubmitFilesResponse, ThemeResponse,
};
