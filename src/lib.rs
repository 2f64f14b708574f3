//! # github-monitor
//!
//! A small web application for finding GitHub repositories by language and
//! topic, looking at their recent activity, and bookmarking them.
//!
//! ## Request flow
//!
//! ```text
//!   form / JSON ──► api handler ──► GitHub client ──► api.github.com
//!                        │                │
//!                        │                ▼
//!                        │        pages 1..=10 (100 each)
//!                        │                │
//!                        │                ▼
//!                        │      relevance score 3/2/2
//!                        │      sort (-relevance, -field)
//!                        ▼
//!                  bookmark store ──► bookmarks/<name>.txt
//!                        │
//!                        └──► notes service (optional)
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for server, data dir, GitHub and notes
//! - [`models`] - Repository, event and request/response types
//! - [`github`] - Query building and the fail-soft GitHub REST client
//! - [`search`] - Paginated search plus client-side relevance ranking
//! - [`bookmarks`] - Flat-file bookmark store
//! - [`notes`] - Optional notes service behind a trait with a disabled variant
//! - [`api`] - Axum handlers and the router
//! - [`state`] - Services shared by the handlers

pub mod api;
pub mod bookmarks;
pub mod config;
pub mod github;
pub mod models;
pub mod notes;
pub mod search;
pub mod state;
