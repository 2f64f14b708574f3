use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for local data; bookmarks live underneath it
    pub data_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// GitHub REST API configuration
    pub github: GitHubConfig,
    /// Optional notes service credentials
    pub notes: NotesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of a GitHub-compatible REST API
    pub api_url: String,
    /// Personal access token. Requests are anonymous when unset.
    pub token: Option<String>,
    /// User-Agent header sent on every request (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token: None,
            user_agent: concat!("github-monitor/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesConfig {
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl NotesConfig {
    /// Both credentials, or None when either is missing or blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|u| !u.trim().is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;
        Some((username, password))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            bind_addr: "127.0.0.1:5000".to_string(),
            github: GitHubConfig::default(),
            notes: NotesConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("GITHUB_MONITOR_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("GITHUB_MONITOR_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("GITHUB_API_URL") {
            config.github.api_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.trim().is_empty() {
                config.github.token = Some(token);
            }
        }

        // Notes integration
        if let Ok(user) = std::env::var("KEEP_USERNAME") {
            config.notes.username = Some(user);
        }
        if let Ok(pass) = std::env::var("KEEP_PASSWORD") {
            config.notes.password = Some(pass);
        }

        config
    }

    pub fn bookmarks_dir(&self) -> PathBuf {
        self.data_dir.join("bookmarks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_values() {
        let mut notes = NotesConfig::default();
        assert!(notes.credentials().is_none());

        notes.username = Some("me@example.com".to_string());
        assert!(notes.credentials().is_none());

        notes.password = Some(String::new());
        assert!(notes.credentials().is_none());

        notes.password = Some("hunter2".to_string());
        assert_eq!(notes.credentials(), Some(("me@example.com", "hunter2")));
    }

    #[test]
    fn test_blank_username_disables_credentials() {
        let notes = NotesConfig {
            username: Some("   ".to_string()),
            password: Some("pw".to_string()),
        };
        assert!(notes.credentials().is_none());
    }

    #[test]
    fn test_bookmarks_dir_is_under_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/srv/monitor"),
            ..Config::default()
        };
        assert_eq!(config.bookmarks_dir(), PathBuf::from("/srv/monitor/bookmarks"));
    }
}
