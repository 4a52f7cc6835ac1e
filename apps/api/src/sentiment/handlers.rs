//! Axum route handler for the text analysis endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::sentiment::{classify, SentimentLabel};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    /// An absent field reads as empty text.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    /// Omitted on the empty-text degenerate path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: u8,
}

/// POST /analyze_text
///
/// Runs the sentiment classifier only. Empty or whitespace-only text is not
/// an error; it yields the neutral zero-confidence payload.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeTextResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Ok(Json(AnalyzeTextResponse {
            success: None,
            text: String::new(),
            sentiment: SentimentLabel::Neutral,
            confidence: 0,
        }));
    }

    let result = classify(&request.text, state.scorer.as_ref())?;
    debug!(
        "classified as {} ({}%, compound {:.4})",
        result.label.as_str(),
        result.confidence,
        result.score
    );

    Ok(Json(AnalyzeTextResponse {
        success: Some(true),
        text: request.text,
        sentiment: result.label,
        confidence: result.confidence,
    }))
}
