use std::sync::Arc;

use crate::core::filters::matches_all;
use crate::models::{Candidate, FilterCriteria};

/// Result of a candidate search
#[derive(Debug)]
pub struct SearchResult {
    pub candidates: Vec<Candidate>,
    pub total_candidates: usize,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Filter a candidate list by query and criteria
///
/// The result is a stable subsequence of `candidates`: matching records keep
/// their input order.
pub fn filter_candidates(
    candidates: &[Candidate],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|candidate| matches_all(candidate, query, criteria))
        .cloned()
        .collect()
}

/// Searches over a fixed, read-only candidate list
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    candidates: Arc<[Candidate]>,
}

impl CandidateFilter {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: candidates.into(),
        }
    }

    pub fn with_seed_candidates() -> Self {
        Self::new(super::fixtures::seed_candidates())
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Run the query and criteria over the candidate list
    pub fn search(&self, query: &str, criteria: &FilterCriteria) -> SearchResult {
        let candidates = filter_candidates(&self.candidates, query, criteria);

        tracing::debug!(
            "Search query={:?} criteria={:?} matched {} of {} candidates",
            query,
            criteria,
            candidates.len(),
            self.candidates.len()
        );

        SearchResult {
            candidates,
            total_candidates: self.candidates.len(),
        }
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::with_seed_candidates()
    }
}
