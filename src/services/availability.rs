use crate::{
    error::{AppError, AppResult},
    models::{AvailabilityRecord, SearchResults, ServiceOffering, TitleId},
    services::service_names,
};
use reqwest::Client as HttpClient;

const SEARCH_COUNTRY: &str = "us";
const OUTPUT_LANGUAGE: &str = "en";

/// Streaming Availability API client (via RapidAPI)
#[derive(Clone)]
pub struct AvailabilityClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    api_host: String,
}

impl AvailabilityClient {
    pub fn new(api_key: String, api_url: String, api_host: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            api_host,
        }
    }

    /// Searches availability candidates for a title, US catalog
    pub async fn search_title(&self, title: &str) -> AppResult<Vec<AvailabilityRecord>> {
        let url = format!("{}/shows/search/title", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(&[
                ("title", title),
                ("country", SEARCH_COUNTRY),
                ("output_language", OUTPUT_LANGUAGE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let results: SearchResults = response.json().await?;
        let records = results.into_records();

        tracing::info!(
            query = %title,
            results = records.len(),
            provider = "streaming_availability",
            "Availability search completed"
        );

        Ok(records)
    }
}

/// Selects the record matching the metadata id, comparing ids as text
///
/// The two upstreams disagree on numeric vs string id representation;
/// `TitleId` already normalizes both to text, so equality here is always the
/// textual comparison. With no id match the first record of the unfiltered
/// list is kept; an empty list selects nothing.
pub fn reconcile<'a>(
    records: &'a [AvailabilityRecord],
    title_id: Option<&TitleId>,
) -> Option<&'a AvailabilityRecord> {
    title_id
        .and_then(|id| records.iter().find(|record| record.tmdb_id.as_ref() == Some(id)))
        .or_else(|| records.first())
}

/// Extracts the US offerings of a record, one per offer
///
/// Service keys map through the display-name table; an offering is owned
/// when its display name is one of the user's enabled apps.
pub fn extract_offerings(
    record: &AvailabilityRecord,
    enabled_apps: &[String],
) -> Vec<ServiceOffering> {
    let Some(options) = record.streaming_options.get(SEARCH_COUNTRY) else {
        return Vec::new();
    };

    options
        .iter()
        .map(|option| {
            let name = service_names::display_name(&option.service.id);
            let owned = enabled_apps.iter().any(|app| app == &name);
            ServiceOffering {
                service_id: option.service.id.clone(),
                name,
                owned,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tmdb_id: &str) -> AvailabilityRecord {
        serde_json::from_str(&format!(r#"{{"tmdbId": "{tmdb_id}"}}"#)).unwrap()
    }

    #[test]
    fn test_reconcile_matches_numeric_id_against_string_record() {
        // TMDB serves 550 as a number, the availability API as "550"
        let title_id: TitleId = serde_json::from_str("550").unwrap();
        let records = vec![record("999"), record("550"), record("550")];

        let selected = reconcile(&records, Some(&title_id)).unwrap();
        assert_eq!(selected.tmdb_id, Some(TitleId::new("550")));
        assert!(std::ptr::eq(selected, &records[1]));
    }

    #[test]
    fn test_reconcile_no_match_falls_back_to_first_record() {
        let title_id = TitleId::new("550");
        let records = vec![record("111"), record("222")];

        let selected = reconcile(&records, Some(&title_id)).unwrap();
        assert!(std::ptr::eq(selected, &records[0]));
    }

    #[test]
    fn test_reconcile_without_id_takes_first_record() {
        let records = vec![record("111"), record("222")];
        let selected = reconcile(&records, None).unwrap();
        assert!(std::ptr::eq(selected, &records[0]));
    }

    #[test]
    fn test_reconcile_empty_list_selects_nothing() {
        assert!(reconcile(&[], Some(&TitleId::new("550"))).is_none());
        assert!(reconcile(&[], None).is_none());
    }

    #[test]
    fn test_extract_offerings_marks_owned_apps() {
        let record: AvailabilityRecord = serde_json::from_str(
            r#"{
                "tmdbId": "550",
                "streamingOptions": {
                    "us": [
                        {"service": {"id": "netflix", "name": "Netflix"}},
                        {"service": {"id": "hulu", "name": "Hulu"}}
                    ]
                }
            }"#,
        )
        .unwrap();

        let enabled = vec!["Netflix".to_string()];
        let offerings = extract_offerings(&record, &enabled);

        assert_eq!(offerings.len(), 2);
        assert_eq!(offerings[0].name, "Netflix");
        assert!(offerings[0].owned);
        assert_eq!(offerings[1].name, "Hulu");
        assert!(!offerings[1].owned);
    }

    #[test]
    fn test_extract_offerings_one_per_offer() {
        // Two Netflix offers (e.g. HD and 4K) list Netflix twice
        let record: AvailabilityRecord = serde_json::from_str(
            r#"{
                "streamingOptions": {
                    "us": [
                        {"service": {"id": "netflix", "name": "Netflix"}},
                        {"service": {"id": "netflix", "name": "Netflix"}}
                    ]
                }
            }"#,
        )
        .unwrap();

        let offerings = extract_offerings(&record, &[]);
        assert_eq!(offerings.len(), 2);
    }

    #[test]
    fn test_extract_offerings_missing_region_is_empty() {
        let record: AvailabilityRecord = serde_json::from_str(
            r#"{"streamingOptions": {"gb": [{"service": {"id": "netflix"}}]}}"#,
        )
        .unwrap();

        assert!(extract_offerings(&record, &[]).is_empty());
    }
}
