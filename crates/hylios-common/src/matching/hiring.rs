//! Display-only hiring outcome prediction.
//!
//! Deterministic step function over the compatibility score:
//!
//! | score   | outcome              |
//! |---------|----------------------|
//! | 85-100  | success, ~7 days     |
//! | 70-84   | success, ~14 days    |
//! | 60-69   | success, ~25 days    |
//! | 50-59   | success, ~40 days    |
//! | 0-49    | no offer expected    |
//!
//! Below the 50 threshold no time estimate is produced. The estimate is
//! monotonic: a higher score never yields a longer wait.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiringPrediction {
    pub success: bool,
    pub estimated_days: Option<u32>,
    pub message: String,
}

const SUCCESS_THRESHOLD: u8 = 50;

pub fn simulate_hiring(score: u8) -> HiringPrediction {
    if score < SUCCESS_THRESHOLD {
        return HiringPrediction {
            success: false,
            estimated_days: None,
            message: "Compatibility is below the hiring threshold; an offer is unlikely.".into(),
        };
    }

    let days = if score >= 85 {
        7
    } else if score >= 70 {
        14
    } else if score >= 60 {
        25
    } else {
        40
    };

    HiringPrediction {
        success: true,
        estimated_days: Some(days),
        message: format!("Hiring likely within approximately {days} days."),
    }
}
