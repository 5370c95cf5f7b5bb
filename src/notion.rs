use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::record::Record;

pub const NOTION_VERSION: &str = "2022-06-28";

/// Somewhere records can be written.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Creates one record and hands back whatever the sink answered, error
    /// bodies included.
    async fn create_record(&self, database_id: &str, record: &Record) -> Result<Value>;
}

#[derive(Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Serialize)]
struct CreatePage<'a> {
    parent: Parent<'a>,
    properties: &'a Record,
}

pub struct NotionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.notion_api_key.clone(), config.notion_base_url.clone())
    }
}

#[async_trait]
impl RecordSink for NotionClient {
    async fn create_record(&self, database_id: &str, record: &Record) -> Result<Value> {
        let payload = CreatePage {
            parent: Parent { database_id },
            properties: record,
        };

        let res = self
            .client
            .post(format!("{}/pages", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, "Notion rejected the page, passing its body through");
        }

        res.json::<Value>()
            .await
            .map_err(|e| AppError::Transport(format!("Notion returned a non-JSON body: {}", e)))
    }
}
