//! Repository search: GitHub query, pagination, then client-side re-rank.

pub mod relevance;

use crate::github::query::build_search_query;
use crate::github::GitHubClient;
use crate::models::{Repository, SortKey};

/// Search GitHub and return results ordered by (-relevance, -sort field).
///
/// Never fails: transport and API errors surface as fewer (or no) results.
pub async fn search_repositories(
    client: &GitHubClient,
    language: Option<&str>,
    topic: &str,
    sort: SortKey,
) -> Vec<Repository> {
    let query = build_search_query(language, topic);
    tracing::info!("Searching repositories: q={query:?} sort={}", sort.as_str());

    let mut repos = client.search_all(&query, sort).await;
    relevance::rank_repositories(&mut repos, topic, sort);
    repos
}
