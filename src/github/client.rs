use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::GitHubError;
use crate::config::GitHubConfig;
use crate::models::{RepoEvent, Repository, SortKey};

/// Items requested per search page (GitHub's maximum).
pub const PER_PAGE: usize = 100;
/// Hard cap on search pages, i.e. at most 1000 results.
pub const MAX_PAGES: u32 = 10;

const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

#[derive(Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<Repository>,
}

/// Thin client over the GitHub REST endpoints used by the app.
///
/// Every public lookup fails soft: errors are logged and turned into an
/// empty or absent result.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_JSON));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GitHubError> {
        let url = format!("{}{path}", self.api_url);
        let mut req = self.http.get(&url).query(query);
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, format!("token {token}"));
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(GitHubError::Status { status, body });
        }

        Ok(resp.json::<T>().await?)
    }

    /// Fetch one page of `/search/repositories`.
    pub async fn search_page(
        &self,
        query: &str,
        sort: SortKey,
        page: u32,
    ) -> Result<Vec<Repository>, GitHubError> {
        let params = [
            ("q", query.to_string()),
            ("sort", sort.as_str().to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("page", page.to_string()),
        ];
        let body: SearchPage = self.get_json("/search/repositories", &params).await?;
        Ok(body.items)
    }

    /// Page through search results in API order.
    ///
    /// Stops at the first short page or after [`MAX_PAGES`]. A non-200 page
    /// ends pagination and keeps what was collected; a transport failure on
    /// any page discards everything and returns an empty list.
    pub async fn search_all(&self, query: &str, sort: SortKey) -> Vec<Repository> {
        let mut all = Vec::new();

        for page in 1..=MAX_PAGES {
            match self.search_page(query, sort, page).await {
                Ok(items) => {
                    let count = items.len();
                    all.extend(items);
                    if count < PER_PAGE {
                        break;
                    }
                }
                Err(e @ GitHubError::Status { .. }) => {
                    tracing::warn!("Search stopped at page {page}: {e}");
                    break;
                }
                Err(e) => {
                    tracing::warn!("Search aborted at page {page}: {e}");
                    return Vec::new();
                }
            }
        }

        tracing::debug!("Search '{query}' collected {} repositories", all.len());
        all
    }

    /// `GET /repos/{owner}/{repo}`; None on any failure.
    pub async fn get_details(&self, owner: &str, repo: &str) -> Option<Repository> {
        match self.get_json(&format!("/repos/{owner}/{repo}"), &[]).await {
            Ok(details) => Some(details),
            Err(e) => {
                tracing::info!("No details for {owner}/{repo}: {e}");
                None
            }
        }
    }

    /// `GET /repos/{owner}/{repo}/events`; empty on any failure.
    pub async fn get_events(&self, owner: &str, repo: &str) -> Vec<RepoEvent> {
        self.get_json(&format!("/repos/{owner}/{repo}/events"), &[])
            .await
            .unwrap_or_else(|e| {
                tracing::info!("No events for {owner}/{repo}: {e}");
                Vec::new()
            })
    }
}
