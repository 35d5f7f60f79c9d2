use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::HashMap, fmt::Display};

/// The eight apps selectable in the sidebar multi-select, all enabled by
/// default in a fresh session
pub const SUPPORTED_APPS: [&str; 8] = [
    "Netflix",
    "Amazon Prime Video",
    "Hulu",
    "Disney+",
    "ESPN+",
    "Max",
    "Paramount+",
    "YouTube Premium",
];

/// Canonical metadata identifier for a title
///
/// TMDB serves ids as JSON numbers while the availability API mirrors them
/// back as numbers or strings depending on endpoint version. Both forms
/// normalize to text here, so id comparison is always textual and a numeric
/// vs string mismatch can never produce a silent false negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleId(String);

impl TitleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TitleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => TitleId(n.to_string()),
            Raw::Text(s) => TitleId(s),
        })
    }
}

// ============================================================================
// Intent Classification Types
// ============================================================================

/// Structured classification of a user query
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Intent {
    #[serde(rename = "intent", default, deserialize_with = "intent_kind_lenient")]
    pub kind: IntentKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// The two query branches. A classification that is missing, unknown, or
/// not even a string falls back to `Recommend` rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntentKind {
    SearchTitle,
    #[default]
    Recommend,
}

fn intent_kind_lenient<'de, D>(deserializer: D) -> Result<IntentKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some("search_title") => IntentKind::SearchTitle,
        _ => IntentKind::Recommend,
    })
}

impl Intent {
    /// The title to look up, when this is a usable title search
    ///
    /// A search intent without a title has nothing to resolve and routes to
    /// the recommendation branch instead.
    pub fn search_title(&self) -> Option<&str> {
        match self.kind {
            IntentKind::SearchTitle => {
                self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
            }
            IntentKind::Recommend => None,
        }
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response from GET /search/multi
#[derive(Debug, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbSearchHit>,
}

/// One TMDB multi-search result
///
/// Movies carry `title`, series carry `name`. Every field is optional so a
/// sparse hit still yields a best-effort match instead of a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchHit {
    #[serde(default)]
    pub id: Option<TitleId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// The top metadata result for a title query, the join key for the
/// availability lookup
#[derive(Debug, Clone, PartialEq)]
pub struct TitleMatch {
    pub id: Option<TitleId>,
    pub title: Option<String>,
    pub poster_url: Option<String>,
}

impl From<TmdbSearchHit> for TitleMatch {
    fn from(hit: TmdbSearchHit) -> Self {
        let poster_url = hit
            .poster_path
            .map(|path| format!("https://image.tmdb.org/t/p/w200{path}"));

        TitleMatch {
            id: hit.id,
            title: hit.title.or(hit.name),
            poster_url,
        }
    }
}

// ============================================================================
// Streaming Availability API Types
// ============================================================================

/// Response from GET /shows/search/title
///
/// Depending on API version the list arrives bare or wrapped in a `result`
/// object. Both shapes resolve here, at the parsing boundary, so the rest of
/// the pipeline only ever sees a record list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResults {
    Bare(Vec<AvailabilityRecord>),
    Wrapped { result: Vec<AvailabilityRecord> },
}

impl SearchResults {
    pub fn into_records(self) -> Vec<AvailabilityRecord> {
        match self {
            SearchResults::Bare(records) => records,
            SearchResults::Wrapped { result } => result,
        }
    }
}

/// One candidate show from the availability search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    #[serde(default)]
    pub tmdb_id: Option<TitleId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub streaming_options: HashMap<String, Vec<StreamingOption>>,
}

/// One regional offer on a record
#[derive(Debug, Clone, Deserialize)]
pub struct StreamingOption {
    pub service: ApiService,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiService {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One service that streams the selected title
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOffering {
    pub service_id: String,
    pub name: String,
    /// True when the display name is one of the user's enabled apps
    pub owned: bool,
}

// ============================================================================
// Conversation Types
// ============================================================================

/// One transcript entry. Turns are appended, never mutated or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
