//! Library API
//!
//! A small REST JSON API for managing a library's authors, books, members,
//! physical copies and loans, backed by a single configurable SQL store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}
