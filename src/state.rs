//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::CookbookService;

#[derive(Clone)]
pub struct AppState {
    pub cookbook_service: Arc<CookbookService>,
}

impl AppState {
    pub fn new(cookbook_service: Arc<CookbookService>) -> Self {
        Self { cookbook_service }
    }
}
