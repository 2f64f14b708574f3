use std::cmp::Ordering;

use crate::models::{Repository, SortKey};

/// Points for a term found inside the repository name.
const NAME_WEIGHT: u32 = 3;
/// Points for a term found inside the description.
const DESCRIPTION_WEIGHT: u32 = 2;
/// Points for a term equal to one of the repository topics.
const TOPIC_WEIGHT: u32 = 2;

/// Lower-cased scoring terms. Unlike the query builder, only whitespace separates terms here.
pub fn scoring_terms(topic: &str) -> Vec<String> {
    topic.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Heuristic relevance of `repo` for `terms`:
/// substring of name = 3, substring of description = 2, exact topic = 2, per term.
pub fn relevance_score(repo: &Repository, terms: &[String]) -> u32 {
    let name = repo.name.to_lowercase();
    let description = repo.description.as_deref().map(str::to_lowercase);
    let topics: Vec<String> = repo.topics.iter().map(|t| t.to_lowercase()).collect();

    let mut score = 0;
    for term in terms {
        if name.contains(term.as_str()) {
            score += NAME_WEIGHT;
        }
        if description.as_deref().is_some_and(|d| d.contains(term.as_str())) {
            score += DESCRIPTION_WEIGHT;
        }
        if topics.iter().any(|t| t == term) {
            score += TOPIC_WEIGHT;
        }
    }
    score
}

/// Descending comparison on the secondary sort field.
fn compare_sort_field(a: &Repository, b: &Repository, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Stars => b.stargazers_count.cmp(&a.stargazers_count),
        SortKey::Forks => b.forks_count.cmp(&a.forks_count),
        SortKey::Updated => b.updated_at.cmp(&a.updated_at),
    }
}

/// Score every repository and stable-sort by (-relevance, -sort field).
///
/// Descriptions are scored as returned by the API; placeholders are applied
/// afterwards so they never match a term.
pub fn rank_repositories(repos: &mut [Repository], topic: &str, sort: SortKey) {
    let terms = scoring_terms(topic);

    for repo in repos.iter_mut() {
        repo.search_relevance = relevance_score(repo, &terms);
        repo.fill_placeholders();
    }

    repos.sort_by(|a, b| {
        b.search_relevance
            .cmp(&a.search_relevance)
            .then_with(|| compare_sort_field(a, b, sort))
    });
}
