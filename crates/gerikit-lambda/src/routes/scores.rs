use axum::Json;
use serde::{Deserialize, Serialize};

use gerikit_scoring::{MmseBand, MorseRisk, RiskFactorSet, interpret_mmse, morse_fall_risk};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct SumRequest {
    pub factors: Vec<serde_json::Value>,
}

#[derive(Serialize)]
pub struct SumResponse {
    pub total: f64,
}

#[derive(Deserialize)]
pub struct ThresholdRequest {
    pub score: f64,
}

#[derive(Serialize)]
pub struct Categorized<B> {
    pub score: f64,
    /// Display label, e.g. "High risk".
    pub category: &'static str,
    pub band: B,
}

pub async fn sum(Json(req): Json<SumRequest>) -> Result<Json<SumResponse>, ApiError> {
    let factors = RiskFactorSet::from_json_values(&req.factors)?;
    Ok(Json(SumResponse {
        total: factors.total(),
    }))
}

pub async fn morse(Json(req): Json<ThresholdRequest>) -> Json<Categorized<MorseRisk>> {
    let band = morse_fall_risk(req.score);
    Json(Categorized {
        score: req.score,
        category: band.label(),
        band,
    })
}

pub async fn mmse(Json(req): Json<ThresholdRequest>) -> Json<Categorized<MmseBand>> {
    let band = interpret_mmse(req.score);
    Json(Categorized {
        score: req.score,
        category: band.label(),
        band,
    })
}
