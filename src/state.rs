use std::sync::Arc;

use crate::config::Config;
use crate::store::ScoreStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScoreStore>,
    pub config: Config,
}

impl FromRef<AppState> for Arc<dyn ScoreStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
