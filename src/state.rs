// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::chatbot::ChatResponder;

pub type SharedState = Arc<AppState>;

/// Built once at startup; never mutated afterwards.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub responder: ChatResponder,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let responder = ChatResponder::from_config(&config.completion)?;
        Ok(Self { config, responder })
    }

    pub fn with_responder(config: Config, responder: ChatResponder) -> Self {
        Self { config, responder }
    }
}
