use crate::{error::AppResult, services::llm::LanguageModel};

/// Generates themed watch recommendations
///
/// Asks the model for exactly five titles restricted to the user's enabled
/// apps. The response is returned raw: recommendation output is free text
/// and no structure is imposed on it, in contrast to intent classification.
pub async fn recommend(
    llm: &dyn LanguageModel,
    query: &str,
    enabled_apps: &[String],
) -> AppResult<String> {
    let apps = enabled_apps.join(", ");
    let prompt = format!(
        "Recommend 5 media items for '{query}' from {apps}. \
         Format as bullet list: * Title (App) - short description."
    );

    let recs = llm.complete(&prompt).await?;

    tracing::info!(query = %query, apps = %apps, "Recommendations generated");

    Ok(recs)
}
