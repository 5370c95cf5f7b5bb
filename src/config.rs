use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::category::Category;
use crate::error::{AppError, Result};

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion database identifiers, one per category. A category without one is
/// rejected before any work is done.
#[derive(Clone, Debug, Default)]
pub struct DatabaseIds {
    pub personal: Option<String>,
    pub research: Option<String>,
    pub shopping: Option<String>,
}

impl DatabaseIds {
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Personal => self.personal.as_deref(),
            Category::Research => self.research.as_deref(),
            Category::Shopping => self.shopping.as_deref(),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub notion_api_key: String,
    pub notion_base_url: String,
    pub database_ids: DatabaseIds,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty
    /// values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| AppError::Config(format!("{} must be set", key)))
        };

        let openai_api_key = require("OPENAI_API_KEY")?;
        let notion_api_key = require("NOTION_API_KEY")?;

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = get("PORT").unwrap_or_else(|| "5000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let database_ids = DatabaseIds {
            personal: get("NOTION_PERSONAL_DATABASE_ID").or_else(|| get("NOTION_DATABASE_ID")),
            research: get("NOTION_RESEARCH_DATABASE_ID"),
            shopping: get("NOTION_SHOPPING_DATABASE_ID"),
        };

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            openai_api_key,
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            notion_api_key,
            notion_base_url: get("NOTION_BASE_URL")
                .unwrap_or_else(|| DEFAULT_NOTION_BASE_URL.to_string()),
            database_ids,
        })
    }
}
