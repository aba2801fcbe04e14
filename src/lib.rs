//! Library catalog server
//!
//! A REST JSON API managing the authors and books of a library catalog,
//! layered as repository ports → domain services → use cases → HTTP handlers.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod usecases;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub use_cases: Arc<usecases::UseCases>,
}

impl AppState {
    pub fn new(use_cases: usecases::UseCases) -> Self {
        Self {
            use_cases: Arc::new(use_cases),
        }
    }
}
