use crate::WorkArrangement;

#[derive(Debug, Clone)]
pub struct LocationEvaluation {
    /// 0-100.
    pub score: f64,
    pub details: String,
}

/// Location compatibility between a job's city/country and a candidate's
/// "City, Country" address string.
///
/// Tiers, checked in order:
/// 1. exact "{city}, {country}" match → 100 (even for remote jobs)
/// 2. remote job → 80 (no commute, address irrelevant)
/// 3. same country (segment after the last ", ") → 60
/// 4. everything else, including a missing address → 30
pub fn evaluate_location(
    city: &str,
    country: &str,
    arrangement: WorkArrangement,
    candidate_location: Option<&str>,
) -> LocationEvaluation {
    let expected = format!("{city}, {country}");
    let candidate = candidate_location.unwrap_or("");

    if candidate == expected {
        return LocationEvaluation {
            score: 100.0,
            details: format!("location match: {candidate}"),
        };
    }

    if arrangement == WorkArrangement::Remote {
        return LocationEvaluation {
            score: 80.0,
            details: "remote job, candidate address not required".into(),
        };
    }

    if let Some(candidate_country) = country_segment(candidate) {
        if candidate_country == country {
            return LocationEvaluation {
                score: 60.0,
                details: format!("same country: {country}"),
            };
        }
    }

    LocationEvaluation {
        score: 30.0,
        details: if candidate.is_empty() {
            "candidate location unknown".into()
        } else {
            format!("location mismatch: {candidate} vs {expected}")
        },
    }
}

/// Country part of a "City, Country" string: the text after the last ", ".
fn country_segment(location: &str) -> Option<&str> {
    location.rsplit_once(", ").map(|(_, country)| country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_scores_full() {
        let result = evaluate_location(
            "Lisbon",
            "Portugal",
            WorkArrangement::Onsite,
            Some("Lisbon, Portugal"),
        );
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn exact_match_beats_remote_tier() {
        let result = evaluate_location(
            "Lisbon",
            "Portugal",
            WorkArrangement::Remote,
            Some("Lisbon, Portugal"),
        );
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn remote_job_relaxes_mismatch_to_eighty() {
        let result = evaluate_location(
            "Lisbon",
            "Portugal",
            WorkArrangement::Remote,
            Some("Berlin, Germany"),
        );
        assert_eq!(result.score, 80.0);
    }

    #[test]
    fn same_country_scores_sixty() {
        let result = evaluate_location(
            "Lisbon",
            "Portugal",
            WorkArrangement::Hybrid,
            Some("Porto, Portugal"),
        );
        assert_eq!(result.score, 60.0);
        assert!(result.details.contains("Portugal"));
    }

    #[test]
    fn different_country_scores_thirty() {
        let result = evaluate_location(
            "Lisbon",
            "Portugal",
            WorkArrangement::Onsite,
            Some("Berlin, Germany"),
        );
        assert_eq!(result.score, 30.0);
    }

    #[test]
    fn missing_location_falls_to_thirty_unless_remote() {
        let onsite = evaluate_location("Lisbon", "Portugal", WorkArrangement::Onsite, None);
        assert_eq!(onsite.score, 30.0);
        assert!(onsite.details.contains("unknown"));

        let remote = evaluate_location("Lisbon", "Portugal", WorkArrangement::Remote, None);
        assert_eq!(remote.score, 80.0);
    }

    #[test]
    fn country_segment_uses_last_separator() {
        assert_eq!(country_segment("Lisbon, Portugal"), Some("Portugal"));
        assert_eq!(
            country_segment("Armacao de Pera, Silves, Portugal"),
            Some("Portugal")
        );
        assert_eq!(country_segment("Lisbon"), None);
        assert_eq!(country_segment(""), None);
    }
}
