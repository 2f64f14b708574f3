/// Fields GitHub should match each topic term against.
const MATCH_FIELDS: &str = "in:name,description,topics,readme";

/// Split a topic string on whitespace and commas.
pub fn topic_terms(topic: &str) -> Vec<&str> {
    topic
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Build the `q` parameter for `/search/repositories`.
///
/// Terms are phrase-quoted and joined by spaces, which GitHub treats as AND.
pub fn build_search_query(language: Option<&str>, topic: &str) -> String {
    let mut parts = Vec::new();

    if let Some(lang) = language.map(str::trim).filter(|l| !l.is_empty()) {
        parts.push(format!("language:{lang}"));
    }

    for term in topic_terms(topic) {
        parts.push(format!("\"{term}\" {MATCH_FIELDS}"));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_and_single_term() {
        let q = build_search_query(Some("rust"), "parser");
        assert_eq!(q, "language:rust \"parser\" in:name,description,topics,readme");
    }

    #[test]
    fn test_blank_language_is_omitted() {
        assert_eq!(
            build_search_query(Some("  "), "cli"),
            "\"cli\" in:name,description,topics,readme"
        );
        assert_eq!(
            build_search_query(None, "cli"),
            "\"cli\" in:name,description,topics,readme"
        );
    }

    #[test]
    fn test_commas_and_spaces_split_terms() {
        assert_eq!(topic_terms("web, framework  async"), vec!["web", "framework", "async"]);
        let q = build_search_query(None, "web,framework");
        assert_eq!(
            q,
            "\"web\" in:name,description,topics,readme \"framework\" in:name,description,topics,readme"
        );
    }

    #[test]
    fn test_empty_topic_yields_language_only() {
        assert_eq!(build_search_query(Some("go"), ""), "language:go");
        assert_eq!(build_search_query(None, " , "), "");
    }
}
