use crate::models::{Candidate, FilterCriteria, SalaryThreshold};

/// Check if a candidate matches the free-text search query
///
/// An empty query matches everything. Otherwise the query must be a
/// case-insensitive substring of the name, the role, or any skill.
#[inline]
pub fn matches_text(candidate: &Candidate, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    candidate.name.to_lowercase().contains(&needle)
        || candidate.role.to_lowercase().contains(&needle)
        || candidate
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

/// Check the experience token against the candidate's descriptor
///
/// This is a plain substring test: "5" matches "5 years" but not "6 years".
#[inline]
pub fn matches_experience(candidate: &Candidate, experience: Option<&str>) -> bool {
    match experience {
        None | Some("") => true,
        Some(token) => candidate.experience.contains(token),
    }
}

#[inline]
pub fn matches_location(candidate: &Candidate, location: Option<&str>) -> bool {
    match location {
        None | Some("") => true,
        Some(place) => candidate.location.contains(place),
    }
}

/// Check the candidate's salary lower bound against a threshold
///
/// A salary string without a parseable lower bound never matches a threshold.
#[inline]
pub fn matches_salary(candidate: &Candidate, threshold: Option<SalaryThreshold>) -> bool {
    let Some(threshold) = threshold else {
        return true;
    };

    match parse_salary_floor(&candidate.salary) {
        Some(floor) => floor >= threshold.floor(),
        None => {
            tracing::debug!(
                "Candidate {} has malformed salary '{}', treating as no match",
                candidate.id,
                candidate.salary
            );
            false
        }
    }
}

/// Extract the lower bound of a salary range like "$120,000 - $150,000"
///
/// Takes the text before the first `-`, keeps only its ASCII digits and parses
/// them. Returns `None` when no digits are left or the value overflows.
pub fn parse_salary_floor(salary: &str) -> Option<u64> {
    let lower = salary.split('-').next().unwrap_or_default();
    let digits: String = lower.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse().ok()
}

/// Check a candidate against every clause of the criteria and query
#[inline]
pub fn matches_all(candidate: &Candidate, query: &str, criteria: &FilterCriteria) -> bool {
    matches_text(candidate, query)
        && matches_experience(candidate, criteria.experience.as_deref())
        && matches_location(candidate, criteria.location.as_deref())
        && matches_salary(candidate, criteria.salary_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_candidate(salary: &str) -> Candidate {
        Candidate {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            role: "Senior React Developer".to_string(),
            experience: "5 years".to_string(),
            location: "San Francisco, CA".to_string(),
            salary: salary.to_string(),
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            match_score: 95,
        }
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let candidate = create_test_candidate("$120,000 - $150,000");

        assert!(matches_text(&candidate, ""));
        assert!(matches_text(&candidate, "john"));
        assert!(matches_text(&candidate, "REACT"));
        assert!(matches_text(&candidate, "typescript"));
        assert!(!matches_text(&candidate, "python"));
    }

    #[test]
    fn test_experience_is_substring() {
        let candidate = create_test_candidate("$120,000 - $150,000");

        assert!(matches_experience(&candidate, None));
        assert!(matches_experience(&candidate, Some("")));
        assert!(matches_experience(&candidate, Some("5")));
        assert!(!matches_experience(&candidate, Some("6")));
    }

    #[test]
    fn test_location_is_case_sensitive() {
        let candidate = create_test_candidate("$120,000 - $150,000");

        assert!(matches_location(&candidate, Some("San Francisco")));
        assert!(!matches_location(&candidate, Some("san francisco")));
    }

    #[test]
    fn test_parse_salary_floor() {
        assert_eq!(parse_salary_floor("$120,000 - $150,000"), Some(120_000));
        assert_eq!(parse_salary_floor("$90,000"), Some(90_000));
        assert_eq!(parse_salary_floor("negotiable"), None);
        assert_eq!(parse_salary_floor("- $150,000"), None);
        assert_eq!(parse_salary_floor(""), None);
    }

    #[test]
    fn test_salary_thresholds() {
        let candidate = create_test_candidate("$120,000 - $150,000");

        assert!(matches_salary(&candidate, None));
        assert!(matches_salary(&candidate, Some(SalaryThreshold::Over100k)));
        assert!(!matches_salary(&candidate, Some(SalaryThreshold::Over150k)));
    }

    #[test]
    fn test_malformed_salary_is_a_miss() {
        let candidate = create_test_candidate("competitive");

        assert!(matches_salary(&candidate, None));
        assert!(!matches_salary(&candidate, Some(SalaryThreshold::Over100k)));
    }
}
