use super::{
    location::evaluate_location,
    skills::score_required_skills,
    weights::{DEFAULT_WEIGHTS, Weights},
    work_type::evaluate_work_type,
};
use crate::{CandidateProfile, JobPosting};

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl MatchingConfig {
    /// Weight overrides from `HYLIOS_WEIGHT_SKILLS` / `HYLIOS_WEIGHT_LOCATION`
    /// / `HYLIOS_WEIGHT_WORK_TYPE`. All three must be set and sum to 1.0,
    /// otherwise the defaults stay in effect.
    pub fn from_env() -> Self {
        let overrides = (
            env_weight("HYLIOS_WEIGHT_SKILLS"),
            env_weight("HYLIOS_WEIGHT_LOCATION"),
            env_weight("HYLIOS_WEIGHT_WORK_TYPE"),
        );

        if let (Some(skills), Some(location), Some(work_type)) = overrides {
            let weights = Weights {
                skills,
                location,
                work_type,
            };
            if weights.is_normalized() {
                return Self { weights };
            }
            tracing::warn!(
                sum = weights.sum(),
                "HYLIOS_WEIGHT_* overrides are not a normalized distribution; using defaults"
            );
        }

        Self::default()
    }
}

fn env_weight(var: &str) -> Option<f64> {
    std::env::var(var).ok().and_then(|s| s.parse().ok())
}

/// One factor's contribution, on the 0-100 scale.
#[derive(Debug, Clone)]
pub struct FactorScore {
    pub score: f64,
    pub details: String,
}

#[derive(Debug, Clone)]
pub struct MatchScore {
    /// Weighted total, rounded to the nearest integer in [0, 100].
    pub total: u8,
    pub skills: FactorScore,
    pub location: FactorScore,
    pub work_type: FactorScore,
}

/// Convenience wrapper using the default weights.
pub fn calculate_match_score(job: &JobPosting, candidate: &CandidateProfile) -> MatchScore {
    MatchEngine::new(MatchingConfig::default()).score(job, candidate)
}

/// Compatibility scorer for (job, candidate) pairs.
///
/// Pure and total: missing optional inputs default (empty skill list, empty
/// address) instead of failing, and the same inputs always produce the same
/// score. Weights come in through the config, never from globals.
pub struct MatchEngine {
    config: MatchingConfig,
}

impl MatchEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, job: &JobPosting, candidate: &CandidateProfile) -> MatchScore {
        let skills = score_required_skills(&job.required_skills, &candidate.skills);
        let location = evaluate_location(
            &job.city,
            &job.country,
            job.work_arrangement,
            candidate.location.as_deref(),
        );
        let work_type = evaluate_work_type(job.work_arrangement, candidate.preferred_arrangement);

        let weights = self.config.weights;
        let total = skills.score * weights.skills
            + location.score * weights.location
            + work_type.score * weights.work_type;

        MatchScore {
            total: total.round().min(100.0) as u8,
            skills: FactorScore {
                score: skills.score,
                details: skills.reason,
            },
            location: FactorScore {
                score: location.score,
                details: location.details,
            },
            work_type: FactorScore {
                score: work_type.score,
                details: work_type.details,
            },
        }
    }
}
