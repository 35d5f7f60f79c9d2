use crate::{
    error::{AppError, AppResult},
    models::Intent,
    services::llm::LanguageModel,
};

/// Classifies a raw user query into a structured intent
///
/// One model call in JSON mode, no retry. The prompt demands exactly the
/// three fields; output that still fails to parse as JSON is a turn-level
/// error for the caller to report. An unknown or missing `intent` value
/// parses to the recommend default instead.
pub async fn classify(llm: &dyn LanguageModel, query: &str) -> AppResult<Intent> {
    let prompt = format!(
        "User query: '{query}'. \
         Respond ONLY in JSON: {{\"intent\": \"search_title\" or \"recommend\", \
         \"title\": \"exact title if search, else null\", \
         \"theme\": \"if recommend, e.g. holiday\"}}"
    );

    let raw = llm.complete_json(&prompt).await?;

    let intent: Intent = serde_json::from_str(strip_code_fence(&raw)).map_err(|e| {
        tracing::warn!(error = %e, response = %raw, "Unparseable intent classification");
        AppError::LanguageModel(format!("Failed to parse intent classification: {e}"))
    })?;

    tracing::info!(
        query = %query,
        kind = ?intent.kind,
        title = ?intent.title,
        "Query classified"
    );

    Ok(intent)
}

/// Some models wrap JSON-mode output in a markdown fence anyway
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
