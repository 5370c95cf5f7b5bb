// Mock downstream services for driving the router without network access.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use article_intake::{
    config::{Config, DatabaseIds},
    error::{AppError, Result},
    llm::CompletionClient,
    notion::RecordSink,
    prompt::Prompt,
    record::Record,
    AppState,
};
use async_trait::async_trait;
use serde_json::Value;

// =============================================================================
// Mock completion API
// =============================================================================

pub struct MockCompletion {
    reply: std::result::Result<String, String>,
    pub prompts: Arc<Mutex<Vec<Prompt>>>,
}

impl MockCompletion {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(AppError::Transport(message.clone())),
        }
    }
}

// =============================================================================
// Mock record sink
// =============================================================================

/// Arguments captured from a create call
#[derive(Debug, Clone)]
pub struct CreateCall {
    pub database_id: String,
    pub properties: Value,
}

pub struct MockSink {
    response: Value,
    pub calls: Arc<Mutex<Vec<CreateCall>>>,
}

impl MockSink {
    pub fn responding(response: Value) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<CreateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSink for MockSink {
    async fn create_record(&self, database_id: &str, record: &Record) -> Result<Value> {
        self.calls.lock().unwrap().push(CreateCall {
            database_id: database_id.to_string(),
            properties: serde_json::to_value(record).unwrap(),
        });
        Ok(self.response.clone())
    }
}

// =============================================================================
// State builders
// =============================================================================

pub fn test_config(database_ids: DatabaseIds) -> Config {
    Config {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        openai_api_key: "sk-test".to_string(),
        openai_model: "gpt-4o".to_string(),
        openai_base_url: "http://openai.invalid/v1".to_string(),
        notion_api_key: "secret_test".to_string(),
        notion_base_url: "http://notion.invalid/v1".to_string(),
        database_ids,
    }
}

pub fn all_databases() -> DatabaseIds {
    DatabaseIds {
        personal: Some("db-personal".to_string()),
        research: Some("db-research".to_string()),
        shopping: Some("db-shopping".to_string()),
    }
}

pub fn test_state(
    database_ids: DatabaseIds,
    completion: Arc<MockCompletion>,
    sink: Arc<MockSink>,
) -> AppState {
    AppState {
        config: Arc::new(test_config(database_ids)),
        completion,
        sink,
    }
}
