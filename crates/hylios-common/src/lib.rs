pub mod api;
pub mod logging;
pub mod matching;

use serde::{Deserialize, Serialize};

/// Work arrangement offered by a job or preferred by a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkArrangement {
    Remote,
    #[default]
    Onsite,
    Hybrid,
}

impl WorkArrangement {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkArrangement::Remote => "remote",
            WorkArrangement::Onsite => "onsite",
            WorkArrangement::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for WorkArrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job lifecycle. Forward-only: open → assigned → completed → paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Assigned,
    Completed,
    Paid,
}

impl JobStatus {
    pub fn next(&self) -> Option<JobStatus> {
        match self {
            JobStatus::Open => Some(JobStatus::Assigned),
            JobStatus::Assigned => Some(JobStatus::Completed),
            JobStatus::Completed => Some(JobStatus::Paid),
            JobStatus::Paid => None,
        }
    }

    pub fn can_transition_to(&self, target: JobStatus) -> bool {
        self.next() == Some(target)
    }
}

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub work_arrangement: WorkArrangement,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-form "City, Country" address string.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub preferred_arrangement: WorkArrangement,
    /// Accepted for API compatibility; not a scoring factor.
    #[serde(default)]
    pub experience_years: u32,
}
