pub mod api;
pub mod category;
pub mod config;
pub mod error;
pub mod extract;
pub mod intake;
pub mod llm;
pub mod notion;
pub mod prompt;
pub mod record;

use std::sync::Arc;
use config::Config;
use llm::{CompletionClient, OpenAiClient};
use notion::{NotionClient, RecordSink};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub completion: Arc<dyn CompletionClient>,
    pub sink: Arc<dyn RecordSink>,
}

impl AppState {
    /// State backed by the real OpenAI and Notion clients.
    pub fn from_config(config: Config) -> Self {
        let completion = Arc::new(OpenAiClient::from_config(&config));
        let sink = Arc::new(NotionClient::from_config(&config));
        Self {
            config: Arc::new(config),
            completion,
            sink,
        }
    }
}
