use crate::{
    error::{AppError, AppResult},
    models::{TitleMatch, TmdbSearchResponse},
};
use reqwest::Client as HttpClient;

const SEARCH_LANGUAGE: &str = "en-US";

/// TMDB title metadata client
#[derive(Clone)]
pub struct TitleSearchClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TitleSearchClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Searches the multi-type endpoint and returns the top-ranked match
    ///
    /// Relevance ranking is delegated entirely to TMDB: the first element of
    /// the result list wins. Returns `None` when nothing matched.
    pub async fn find_title(&self, title: &str) -> AppResult<Option<TitleMatch>> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Title query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search/multi", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", title),
                ("language", SEARCH_LANGUAGE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        let search: TmdbSearchResponse = response.json().await?;
        let best = search.results.into_iter().next().map(TitleMatch::from);

        tracing::info!(
            query = %title,
            found = best.is_some(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(best)
    }
}
