use std::sync::Arc;

use crate::{
    api::{LatencyProfile, LocalizeApi},
    config::Config,
    fixtures,
    store::FixtureStore,
};

#[derive(Clone)]
pub struct AppState {
    pub api: LocalizeApi,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        // The store is built here and injected through the facade; nothing in
        // the crate reaches for a global.
        let store = Arc::new(FixtureStore::new(fixtures::seed_catalog()));
        let api = LocalizeApi::with_latency(store, LatencyProfile::from_config(&config.latency));

        Self { api, config }
    }
}
