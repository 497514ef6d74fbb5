use std::{fmt, sync::Arc};

use folio_core::CatalogService;

use crate::infra::config::Config;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    catalog: CatalogService,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>, catalog: CatalogService) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &Config {
        self.config.as_ref()
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }
}
