use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_LANGUAGE: &str = "Not specified";

/// GitHub sends `null` for some fields it normally fills; read it as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A GitHub repository as returned by the search and repos endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `owner/name`
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default)]
    pub owner: Option<RepoOwner>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks_count: u64,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_issues_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchers_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Client-side relevance, filled in by the search ranker
    #[serde(default, deserialize_with = "null_as_default")]
    pub search_relevance: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoOwner {
    pub login: String,
}

impl Repository {
    /// Replace absent description/language with display placeholders.
    pub fn fill_placeholders(&mut self) {
        if self.description.is_none() {
            self.description = Some(NO_DESCRIPTION.to_string());
        }
        if self.language.is_none() {
            self.language = Some(NO_LANGUAGE.to_string());
        }
    }
}

/// A single entry from `/repos/{owner}/{repo}/events`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub actor: Option<EventActor>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventActor {
    pub login: String,
}

/// Secondary ordering applied after relevance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Stars,
    Forks,
    Updated,
}

impl SortKey {
    /// Parse a form value; blank means the default.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "stars" => Some(SortKey::Stars),
            "forks" => Some(SortKey::Forks),
            "updated" => Some(SortKey::Updated),
            _ => None,
        }
    }

    /// Value of the `sort` query parameter sent to GitHub
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Forks => "forks",
            SortKey::Updated => "updated",
        }
    }
}

/// Search form, shared by the HTML page and the JSON API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl SearchForm {
    pub fn sort_key(&self) -> SortKey {
        let raw = self.sort.as_deref().unwrap_or_default();
        SortKey::parse(raw).unwrap_or_else(|| {
            tracing::warn!("Unknown sort key '{raw}', falling back to stars");
            SortKey::Stars
        })
    }
}

/// Response of the combined detail-and-events endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RepoDetailsResponse {
    pub details: Repository,
    pub events: Vec<RepoEvent>,
}

/// Bookmark request body
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Bookmark response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub storage: Option<String>,
}
