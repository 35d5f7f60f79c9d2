use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    models::{ChatTurn, SUPPORTED_APPS},
    services::{
        availability::AvailabilityClient, chat::ChatPipeline, llm::GroqClient,
        title_search::TitleSearchClient,
    },
};

/// Opening assistant turn of a fresh session
pub const GREETING: &str =
    "Hi! Ask 'Where to watch Cool Runnings?' or 'Board game night playlist'.";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The session sits behind a mutex held for a whole turn: the pipeline
    /// runs to completion before the next query is accepted.
    pub session: Arc<Mutex<Session>>,
    pub pipeline: Arc<ChatPipeline>,
}

/// The single chat session: an append-only transcript plus the enabled apps
pub struct Session {
    pub transcript: Vec<ChatTurn>,
    pub enabled_apps: Vec<String>,
}

impl Session {
    /// Fresh session: greeting turn, all supported apps enabled
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatTurn::assistant(GREETING)],
            enabled_apps: SUPPORTED_APPS.iter().map(|app| app.to_string()).collect(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Builds the upstream clients and pipeline from configuration
    pub fn new(config: &Config) -> Self {
        let llm = Arc::new(GroqClient::new(
            config.groq_api_key.clone(),
            config.groq_api_url.clone(),
            config.groq_model.clone(),
        ));
        let titles =
            TitleSearchClient::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone());
        let availability = AvailabilityClient::new(
            config.stream_api_key.clone(),
            config.stream_api_url.clone(),
            config.stream_api_host.clone(),
        );

        Self {
            session: Arc::new(Mutex::new(Session::new())),
            pipeline: Arc::new(ChatPipeline::new(llm, titles, availability)),
        }
    }
}
