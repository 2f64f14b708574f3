use axum::extract::State;
use axum::response::Html;
use axum::Form;

use crate::models::{Repository, SearchForm};
use crate::search::search_repositories;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");
/// Placeholder in the page replaced by server-rendered results.
const RESULTS_MARKER: &str = "<!-- results -->";

/// GET / - Serve the front end with an empty result list.
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST / - Classic form submit: search when a topic was given, render the list.
pub async fn search_page(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let topic = form.topic.as_deref().unwrap_or_default();
    let results = if topic.trim().is_empty() {
        Vec::new()
    } else {
        search_repositories(&state.github, form.language.as_deref(), topic, form.sort_key()).await
    };

    Html(INDEX_HTML.replacen(RESULTS_MARKER, &render_results(&results), 1))
}

/// Render repositories as a list of result cards.
pub fn render_results(repos: &[Repository]) -> String {
    if repos.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul class=\"results\">\n");
    for repo in repos {
        let topics: Vec<String> = repo
            .topics
            .iter()
            .map(|t| format!("<span class=\"topic\">{}</span>", escape_html(t)))
            .collect();

        html.push_str(&format!(
            "<li class=\"repo\" data-full-name=\"{full_name}\">\
             <a href=\"{url}\">{full_name}</a>\
             <p>{description}</p>\
             <div class=\"meta\">{language} · ★ {stars} · forks {forks} · relevance {relevance}</div>\
             <div class=\"topics\">{topics}</div>\
             </li>\n",
            full_name = escape_html(&repo.full_name),
            url = escape_html(&repo.html_url),
            description = escape_html(repo.description.as_deref().unwrap_or_default()),
            language = escape_html(repo.language.as_deref().unwrap_or_default()),
            stars = repo.stargazers_count,
            forks = repo.forks_count,
            relevance = repo.search_relevance,
            topics = topics.join(""),
        ));
    }
    html.push_str("</ul>");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_contains_marker() {
        assert!(INDEX_HTML.contains(RESULTS_MARKER));
    }

    #[test]
    fn test_render_escapes_markup() {
        let repo: Repository = serde_json::from_value(serde_json::json!({
            "name": "xss",
            "full_name": "evil/xss",
            "html_url": "https://github.com/evil/xss",
            "description": "<script>alert('x')</script>",
            "topics": ["a&b"],
            "stargazers_count": 4,
        }))
        .unwrap();

        let html = render_results(&[repo]);
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("<span class=\"topic\">a&amp;b</span>"));
        assert!(html.contains("★ 4"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_empty_is_blank() {
        assert_eq!(render_results(&[]), "");
    }
}
