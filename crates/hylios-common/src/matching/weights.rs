/// Default factor weights for the compatibility score.
/// Skills dominate; location and work-type preference refine the ranking.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 0.60,
    location: 0.25,
    work_type: 0.15,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub location: f64,
    pub work_type: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.work_type
    }

    /// A weight set is usable only when every factor weight lies in [0, 1]
    /// and together they distribute exactly one unit; otherwise the 0-100
    /// invariant breaks.
    pub fn is_normalized(&self) -> bool {
        let in_range = |w: f64| (0.0..=1.0).contains(&w);

        in_range(self.skills)
            && in_range(self.location)
            && in_range(self.work_type)
            && (self.sum() - 1.0).abs() < 1e-6
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!(DEFAULT_WEIGHTS.is_normalized());
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn skewed_weights_are_rejected() {
        let skewed = Weights {
            skills: 0.9,
            location: 0.25,
            work_type: 0.15,
        };
        assert!(!skewed.is_normalized());
    }

    #[test]
    fn negative_weights_are_rejected_even_when_they_sum_to_one() {
        let negative = Weights {
            skills: 1.5,
            location: -0.25,
            work_type: -0.25,
        };
        assert!((negative.sum() - 1.0).abs() < 1e-6);
        assert!(!negative.is_normalized());
    }
}
