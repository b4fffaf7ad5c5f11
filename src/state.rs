use crate::repositories::TransactionStore;
use std::sync::Arc;

/// Shared application state available to all route handlers via axum's
/// `State` extractor. Built once at startup and dropped on shutdown.
pub struct AppState {
    /// Handle to the transaction collection.
    pub store: Arc<dyn TransactionStore>,

    /// Client used to download the seed feed.
    pub http: reqwest::Client,

    pub seed_url: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn TransactionStore>,
        http: reqwest::Client,
        seed_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            http,
            seed_url: seed_url.into(),
        }
    }
}
