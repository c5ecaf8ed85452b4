use crate::WorkArrangement;

#[derive(Debug, Clone)]
pub struct WorkTypeEvaluation {
    /// 0-100.
    pub score: f64,
    pub details: String,
}

/// Work-arrangement preference: 100 on an exact match, 70 when the job is
/// hybrid (some flexibility either way), 30 otherwise.
pub fn evaluate_work_type(
    job: WorkArrangement,
    preferred: WorkArrangement,
) -> WorkTypeEvaluation {
    if job == preferred {
        return WorkTypeEvaluation {
            score: 100.0,
            details: format!("arrangement match: {job}"),
        };
    }

    if job == WorkArrangement::Hybrid {
        return WorkTypeEvaluation {
            score: 70.0,
            details: format!("hybrid job accommodates {preferred} preference"),
        };
    }

    WorkTypeEvaluation {
        score: 30.0,
        details: format!("arrangement mismatch: job {job} vs preferred {preferred}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_preference_scores_full() {
        for arrangement in [
            WorkArrangement::Remote,
            WorkArrangement::Onsite,
            WorkArrangement::Hybrid,
        ] {
            let result = evaluate_work_type(arrangement, arrangement);
            assert_eq!(result.score, 100.0);
        }
    }

    #[test]
    fn hybrid_job_softens_mismatch() {
        let result = evaluate_work_type(WorkArrangement::Hybrid, WorkArrangement::Remote);
        assert_eq!(result.score, 70.0);
    }

    #[test]
    fn hard_mismatch_scores_thirty() {
        let result = evaluate_work_type(WorkArrangement::Onsite, WorkArrangement::Remote);
        assert_eq!(result.score, 30.0);
        assert!(result.details.contains("onsite"));
        assert!(result.details.contains("remote"));
    }

    #[test]
    fn hybrid_preference_does_not_soften_onsite_job() {
        // The 70 tier is keyed on the job being hybrid, not the candidate.
        let result = evaluate_work_type(WorkArrangement::Onsite, WorkArrangement::Hybrid);
        assert_eq!(result.score, 30.0);
    }
}
