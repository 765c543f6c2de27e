use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use gerikit_notes::{NoteAnalysis, NoteAnalyzer};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<NoteAnalysis> {
    Json(NoteAnalyzer::new(&state.tables).analyze(&req.text))
}
