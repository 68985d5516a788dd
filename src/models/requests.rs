use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CriteriaError, FilterCriteria, UploadMode};

/// Search parameters accepted by `/search` and `/api/v1/candidates`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchCandidatesRequest {
    #[validate(length(max = 200))]
    #[serde(default, alias = "query")]
    pub q: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "salary_range", rename = "salaryRange")]
    pub salary_range: Option<String>,
}

impl SearchCandidatesRequest {
    pub fn criteria(&self) -> Result<FilterCriteria, CriteriaError> {
        FilterCriteria::from_raw(
            self.experience.as_deref(),
            self.location.as_deref(),
            self.salary_range.as_deref(),
        )
    }
}

/// Request to submit files to the intake
///
/// The batch size limit lives in the intake settings, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFilesRequest {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub mode: UploadMode,
}
