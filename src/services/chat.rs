use std::sync::Arc;

use crate::{
    error::AppResult,
    models::ServiceOffering,
    services::{
        availability::{self, AvailabilityClient},
        intent,
        llm::LanguageModel,
        recommendations,
        title_search::TitleSearchClient,
    },
};

const ERROR_MESSAGE_LIMIT: usize = 150;

pub const TITLE_NOT_FOUND: &str = "❌ Title not found.";
const NO_SUBSCRIPTION_FALLBACK: &str = "Rent/buy only (check paid options)";

/// One pipeline result: the assistant-visible text, plus an optional poster
/// for the widget to render next to it (the transcript stores text only)
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub poster_url: Option<String>,
}

impl Answer {
    fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            poster_url: None,
        }
    }
}

/// The per-turn query pipeline
///
/// Classify, then either resolve the title through both lookup services or
/// generate recommendations. Every upstream call runs sequentially and at
/// most once; turn state is local and discarded after the answer.
pub struct ChatPipeline {
    llm: Arc<dyn LanguageModel>,
    titles: TitleSearchClient,
    availability: AvailabilityClient,
}

impl ChatPipeline {
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        titles: TitleSearchClient,
        availability: AvailabilityClient,
    ) -> Self {
        Self {
            llm,
            titles,
            availability,
        }
    }

    /// Runs one turn, converting any pipeline failure into the
    /// assistant-visible error message so the session survives it
    pub async fn run_turn(&self, query: &str, enabled_apps: &[String]) -> Answer {
        match self.answer(query, enabled_apps).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!(query = %query, error = %e, "Turn failed");
                Answer::text_only(format_turn_error(&e.to_string()))
            }
        }
    }

    async fn answer(&self, query: &str, enabled_apps: &[String]) -> AppResult<Answer> {
        let intent = intent::classify(self.llm.as_ref(), query).await?;

        match intent.search_title() {
            Some(title) => self.answer_title_lookup(title, enabled_apps).await,
            None => {
                let recs =
                    recommendations::recommend(self.llm.as_ref(), query, enabled_apps).await?;
                Ok(Answer::text_only(format_recommendations(query, &recs)))
            }
        }
    }

    async fn answer_title_lookup(&self, title: &str, enabled_apps: &[String]) -> AppResult<Answer> {
        let Some(title_match) = self.titles.find_title(title).await? else {
            return Ok(Answer::text_only(TITLE_NOT_FOUND));
        };

        let records = self.availability.search_title(title).await?;
        let selected = availability::reconcile(&records, title_match.id.as_ref());
        let offerings = selected
            .map(|record| availability::extract_offerings(record, enabled_apps))
            .unwrap_or_default();

        Ok(Answer {
            text: format_title_answer(title, &offerings),
            poster_url: title_match.poster_url,
        })
    }
}

/// Formats the title-lookup reply, emphasizing offerings on the user's apps
pub fn format_title_answer(title: &str, offerings: &[ServiceOffering]) -> String {
    let services = if offerings.is_empty() {
        NO_SUBSCRIPTION_FALLBACK.to_string()
    } else {
        offerings
            .iter()
            .map(|offering| {
                if offering.owned {
                    format!("**{}**", offering.name)
                } else {
                    offering.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!("🎥 **Found: {title}**\n\nAvailable on your subs: {services}")
}

/// Formats the recommendation reply around the model's raw text
pub fn format_recommendations(query: &str, recs: &str) -> String {
    format!("🌟 **AI Recs for {query}**:\n\n{recs}")
}

/// Formats a turn-level failure, truncated to keep the transcript readable
pub fn format_turn_error(message: &str) -> String {
    let truncated: String = message.chars().take(ERROR_MESSAGE_LIMIT).collect();
    format!("⚠️ Error: {truncated}. Try again.")
}
