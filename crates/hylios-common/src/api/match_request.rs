use serde::Deserialize;

use crate::{CandidateProfile, JobPosting};

/// HTTP match request: both payloads are required; anything optional inside
/// them is defaulted by the domain types.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub job: JobPosting,
    pub candidate: CandidateProfile,
}
