use super::skills::score_required_skills;
use crate::JobPosting;

const TIER_LOW: &str =
    "This posting is a weak fit for your profile; look for better-aligned postings.";
const TIER_GOOD: &str = "Good potential for this posting; review the requirements before applying.";
const TIER_EXCELLENT: &str = "Excellent match! Your profile aligns strongly with this posting.";

/// Advisory strings for a scored (job, candidate) pair, in render order:
/// an optional missing-skills message followed by exactly one tier message.
///
/// Tier boundaries belong to the upper tier: 60 is "good potential",
/// 80 is "excellent".
pub fn generate_recommendations(
    job: &JobPosting,
    candidate_skills: &[String],
    score: u8,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let skill_match = score_required_skills(&job.required_skills, candidate_skills);
    if !skill_match.missing.is_empty() {
        recommendations.push(format!(
            "Consider developing these skills: {}",
            skill_match.missing.join(", ")
        ));
    }

    recommendations.push(tier_message(score).to_string());
    recommendations
}

fn tier_message(score: u8) -> &'static str {
    if score < 60 {
        TIER_LOW
    } else if score < 80 {
        TIER_GOOD
    } else {
        TIER_EXCELLENT
    }
}
