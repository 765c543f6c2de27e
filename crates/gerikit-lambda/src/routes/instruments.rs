use axum::Json;
use axum::extract::Path;
use serde::{Deserialize, Serialize};

use gerikit_scoring::scoring::{Domain, ScoreEntry};
use gerikit_scoring::{InstrumentScore, RiskFactorSet, all_instruments, require_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
}

/// Either positional factors or named item scores.
#[derive(Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub factors: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub scores: Option<Vec<ScoreEntry>>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = require_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
    }))
}

pub async fn score_instrument(
    Path(id): Path<String>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<InstrumentScore>, ApiError> {
    let instrument = require_instrument(&id)?;

    let score = match (req.factors, req.scores) {
        (Some(factors), None) => {
            instrument.score_factors(&RiskFactorSet::from_json_values(&factors)?)
        }
        (None, Some(scores)) => instrument.score_entries(&scores)?,
        _ => {
            return Err(ApiError::BadRequest(
                "provide exactly one of 'factors' or 'scores'".to_string(),
            ));
        }
    };

    tracing::debug!(
        instrument = %score.instrument_id,
        total = score.total,
        out_of_range = score.validation_errors.len(),
        "instrument scored"
    );
    Ok(Json(score))
}
