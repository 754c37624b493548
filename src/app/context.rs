use std::sync::Arc;

use crate::checkpoint::CheckpointStore;
use crate::config::Config;
use crate::delivery::Mailer;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::normalizer::Normalizer;

/// Wires together the collaborators for one run.
pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
    pub checkpoint: CheckpointStore,
    pub mailer: Mailer,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self::with_checkpoint(config, CheckpointStore::for_current_user())
    }

    /// Build a context with an explicit checkpoint store, for tests or a
    /// non-default state directory.
    pub fn with_checkpoint(config: Config, checkpoint: CheckpointStore) -> Self {
        let mailer = Mailer::new(&config.email);
        Self {
            config,
            fetcher: Arc::new(HttpFetcher::new()),
            normalizer: Normalizer::new(),
            checkpoint,
            mailer,
        }
    }
}
