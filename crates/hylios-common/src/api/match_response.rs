use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::hiring::HiringPrediction;
use crate::matching::scoring::MatchScore;

/// Match result returned to the UI. Ephemeral: built per request, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Final compatibility score, 0-100.
    pub score: u8,
    /// Advisory strings, render order preserved.
    pub recommendations: Vec<String>,
    pub prediction: PredictionDto,
    pub breakdown: ScoreBreakdown,
    pub matched_at: DateTime<Utc>,
}

impl MatchResponse {
    pub fn from_parts(
        score: &MatchScore,
        recommendations: Vec<String>,
        prediction: &HiringPrediction,
        matched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            score: score.total,
            recommendations,
            prediction: PredictionDto::from(prediction),
            breakdown: ScoreBreakdown::from(score),
            matched_at,
        }
    }
}

/// Per-factor sub-scores, each 0-100.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub skills: f32,
    pub location: f32,
    pub work_type: f32,
}

impl From<&MatchScore> for ScoreBreakdown {
    fn from(value: &MatchScore) -> Self {
        Self {
            skills: value.skills.score as f32,
            location: value.location.score as f32,
            work_type: value.work_type.score as f32,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDto {
    pub success: bool,
    pub estimated_days: Option<u32>,
    pub message: String,
}

impl From<&HiringPrediction> for PredictionDto {
    fn from(value: &HiringPrediction) -> Self {
        Self {
            success: value.success,
            estimated_days: value.estimated_days,
            message: value.message.clone(),
        }
    }
}
