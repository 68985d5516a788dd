use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Candidate record shown on the search screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Free text such as "5 years"
    pub experience: String,
    pub location: String,
    /// Free text such as "$120,000 - $150,000"
    pub salary: String,
    pub skills: Vec<String>,
    /// Precomputed score in 0..=100
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Errors raised while turning raw request values into filter criteria
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Unknown salary range '{0}', expected one of: 100k+, 150k+ (encode '+' as %2B in query strings)")]
    UnknownSalaryRange(String),
}

/// Salary lower-bound thresholds offered by the search screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryThreshold {
    #[serde(rename = "100k+")]
    Over100k,
    #[serde(rename = "150k+")]
    Over150k,
}

impl SalaryThreshold {
    pub const ALL: [SalaryThreshold; 2] = [SalaryThreshold::Over100k, SalaryThreshold::Over150k];

    /// Minimum salary lower bound a candidate must have
    pub fn floor(self) -> u64 {
        match self {
            SalaryThreshold::Over100k => 100_000,
            SalaryThreshold::Over150k => 150_000,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            SalaryThreshold::Over100k => "100k+",
            SalaryThreshold::Over150k => "150k+",
        }
    }
}

impl fmt::Display for SalaryThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SalaryThreshold {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // An unencoded '+' in a query string arrives as a space
        match s {
            "100k+" | "100k " => Ok(SalaryThreshold::Over100k),
            "150k+" | "150k " => Ok(SalaryThreshold::Over150k),
            other => Err(CriteriaError::UnknownSalaryRange(other.to_string())),
        }
    }
}

/// Constraints narrowing the candidate list; `None` means unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub experience: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "salaryRange")]
    pub salary_range: Option<SalaryThreshold>,
}

impl FilterCriteria {
    /// Build criteria from raw form values, treating empty strings as unset
    pub fn from_raw(
        experience: Option<&str>,
        location: Option<&str>,
        salary_range: Option<&str>,
    ) -> Result<Self, CriteriaError> {
        let salary_range = match non_empty(salary_range) {
            Some(token) => Some(token.parse()?),
            None => None,
        };

        Ok(Self {
            experience: non_empty(experience).map(str::to_string),
            location: non_empty(location).map(str::to_string),
            salary_range,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.experience.is_none() && self.location.is_none() && self.salary_range.is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Display theme of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Whether the upload picker takes one file or many
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    #[default]
    Single,
    Batch,
}

/// Observable state of the file intake
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeSnapshot {
    pub busy: bool,
    pub uploaded: Vec<String>,
}

/// Dashboard tile on the landing screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    pub trend: String,
}

/// Labelled choice offered by a search filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// All choices offered by the search screen's filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub experience: Vec<FilterOption>,
    pub locations: Vec<FilterOption>,
    #[serde(rename = "salaryRanges")]
    pub salary_ranges: Vec<FilterOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_threshold_parse() {
        assert_eq!("100k+".parse::<SalaryThreshold>(), Ok(SalaryThreshold::Over100k));
        assert_eq!("150k+".parse::<SalaryThreshold>(), Ok(SalaryThreshold::Over150k));
        assert_eq!("150k ".parse::<SalaryThreshold>(), Ok(SalaryThreshold::Over150k));
        assert_eq!(
            "200k+".parse::<SalaryThreshold>(),
            Err(CriteriaError::UnknownSalaryRange("200k+".to_string()))
        );
    }

    #[test]
    fn test_criteria_from_raw_treats_empty_as_unset() {
        let criteria = FilterCriteria::from_raw(Some(""), Some(""), Some("")).unwrap();
        assert!(criteria.is_empty());

        let criteria = FilterCriteria::from_raw(Some("5"), None, Some("100k+")).unwrap();
        assert_eq!(criteria.experience.as_deref(), Some("5"));
        assert_eq!(criteria.location, None);
        assert_eq!(criteria.salary_range, Some(SalaryThreshold::Over100k));
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_candidate_wire_names() {
        let candidate = Candidate {
            id: 7,
            name: "Test".to_string(),
            email: "test@email.com".to_string(),
            role: "Engineer".to_string(),
            experience: "1 years".to_string(),
            location: "Remote".to_string(),
            salary: "$1 - $2".to_string(),
            skills: vec![],
            match_score: 50,
        };

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["matchScore"], 50);
    }
}
