use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    /// 0-100.
    pub score: f64,
    pub matched: Vec<String>,
    /// Required skills the candidate lacks, in the job's listing order.
    pub missing: Vec<String>,
    pub reason: String,
}

/// Required-skill coverage for a (job, candidate) pair.
///
/// Comparison is exact and case-sensitive. A job with no required skills
/// matches vacuously at 100. Duplicate entries in the required list are
/// counted once.
pub fn score_required_skills(required: &[String], possessed: &[String]) -> SkillMatchResult {
    let required = dedup_preserving_order(required);

    if required.is_empty() {
        return SkillMatchResult {
            score: 100.0,
            matched: vec![],
            missing: vec![],
            reason: "no required skills listed".into(),
        };
    }

    let possessed: HashSet<&str> = possessed.iter().map(String::as_str).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in &required {
        if possessed.contains(skill.as_str()) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let score = matched.len() as f64 / required.len() as f64 * 100.0;

    SkillMatchResult {
        score,
        reason: format!(
            "{} of {} required skills present{}",
            matched.len(),
            required.len(),
            if missing.is_empty() {
                String::new()
            } else {
                format!(" (missing: {})", missing.join(", "))
            }
        ),
        matched,
        missing,
    }
}

fn dedup_preserving_order(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|skill| seen.insert(skill.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_requirements_match_vacuously() {
        let result = score_required_skills(&[], &skills(&["React"]));
        assert_eq!(result.score, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn superset_candidate_scores_full() {
        let result = score_required_skills(
            &skills(&["React", "Node.js"]),
            &skills(&["React", "Node.js", "TypeScript"]),
        );
        assert_eq!(result.score, 100.0);
        assert_eq!(result.matched, skills(&["React", "Node.js"]));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn partial_overlap_is_proportional() {
        let result = score_required_skills(&skills(&["React", "Node.js"]), &skills(&["React"]));
        assert_eq!(result.score, 50.0);
        assert_eq!(result.missing, skills(&["Node.js"]));
        assert!(result.reason.contains("1 of 2"));
        assert!(result.reason.contains("missing: Node.js"));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let result = score_required_skills(&skills(&["React"]), &skills(&["react"]));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing, skills(&["React"]));
    }

    #[test]
    fn duplicate_requirements_count_once() {
        let result = score_required_skills(
            &skills(&["React", "React", "Node.js"]),
            &skills(&["React"]),
        );
        assert_eq!(result.score, 50.0);
        assert_eq!(result.missing, skills(&["Node.js"]));
    }

    #[test]
    fn missing_skills_keep_listing_order() {
        let result = score_required_skills(
            &skills(&["GraphQL", "Rust", "Docker"]),
            &skills(&["Rust"]),
        );
        assert_eq!(result.missing, skills(&["GraphQL", "Docker"]));
    }
}
