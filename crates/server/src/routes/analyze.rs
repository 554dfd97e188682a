use axum::extract::State;
use axum::Json;
use labellens::{render_markdown, Tier};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;

/// Request to analyze one ingredient label
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw ingredient list text as printed on the packaging
    pub label: String,

    /// Also render the markdown report
    #[serde(default)]
    pub include_report: bool,
}

/// Response for a single label analysis
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub fda_matches: Vec<String>,
    pub common_matches: Vec<String>,
    pub unresolved: Vec<String>,
    pub percentage: f64,
    pub tier: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

/// Analyze an ingredient label.
///
/// Runs the label through decomposition, classification against both
/// alias dictionaries, and coverage scoring. Unresolved phrases are a
/// normal part of the response, not an error.
pub async fn analyze_label(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<AnalyzeRequest>,
) -> ServerResult<Json<AnalyzeResponse>> {
    if request.label.trim().is_empty() {
        return Err(ServerError::BadRequest("label must not be empty".into()));
    }

    let analysis = state.analyzer.analyze(&request.label);

    let report = request
        .include_report
        .then(|| render_markdown(&request.label, &analysis.classification, &analysis.score));

    Ok(Json(AnalyzeResponse {
        fda_matches: analysis.classification.fda_matches.iter().cloned().collect(),
        common_matches: analysis
            .classification
            .common_matches
            .iter()
            .cloned()
            .collect(),
        unresolved: analysis.classification.unresolved.clone(),
        percentage: analysis.score.percentage,
        tier: analysis.score.tier,
        report,
    }))
}
