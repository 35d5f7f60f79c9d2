use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// The three API keys have no defaults: a missing key fails startup, so a
/// broken deployment is reported once instead of surfacing mid-chat.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Groq API key for intent classification and recommendations
    pub groq_api_key: String,

    /// Groq chat completions endpoint
    #[serde(default = "default_groq_api_url")]
    pub groq_api_url: String,

    /// Model used for both classification and recommendations
    #[serde(default = "default_groq_model")]
    pub groq_model: String,

    /// TMDB API key for title metadata search
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Streaming Availability API key (RapidAPI)
    pub stream_api_key: String,

    /// Streaming Availability API base URL
    #[serde(default = "default_stream_api_url")]
    pub stream_api_url: String,

    /// RapidAPI host header value
    #[serde(default = "default_stream_api_host")]
    pub stream_api_host: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_groq_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_groq_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_stream_api_url() -> String {
    "https://streaming-availability.p.rapidapi.com".to_string()
}

fn default_stream_api_host() -> String {
    "streaming-availability.p.rapidapi.com".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
