use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;

use hylios_common::api::match_request::MatchRequest;
use hylios_common::api::match_response::MatchResponse;
use hylios_common::matching::hiring::simulate_hiring;
use hylios_common::matching::recommendations::generate_recommendations;
use hylios_common::matching::scoring::MatchEngine;

use crate::SharedState;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// POST /api/match — score a (job, candidate) pair.
///
/// A missing or malformed payload is a caller-contract violation and maps to
/// 400; the engine itself never fails.
pub async fn run_match(
    State(state): State<SharedState>,
    _auth: AuthUser,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|err| ApiError::BadRequest(format!("invalid match payload: {err}")))?;

    let engine = MatchEngine::new(state.match_config.clone());
    let score = engine.score(&request.job, &request.candidate);
    let recommendations =
        generate_recommendations(&request.job, &request.candidate.skills, score.total);
    let prediction = simulate_hiring(score.total);

    tracing::debug!(
        job = %request.job.title,
        score = score.total,
        "match computed"
    );

    Ok(Json(MatchResponse::from_parts(
        &score,
        recommendations,
        &prediction,
        Utc::now(),
    )))
}
