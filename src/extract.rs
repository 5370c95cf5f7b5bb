//! Parses the model's reply into per-category fields.
//!
//! The reply must be a bare JSON object. Nothing is stripped or repaired, and
//! enum-valued fields are taken as given.

use serde_json::{Map, Value};

use crate::category::Category;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalFields {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchFields {
    pub title: String,
    pub tags: String,
    pub tldr: String,
    pub relevance: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingFields {
    pub name: String,
    pub price: f64,
    /// Echoed back by the model; the mapper files the request url instead.
    pub url: String,
    pub urgency: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedFields {
    Personal(PersonalFields),
    Research(ResearchFields),
    Shopping(ShoppingFields),
}

pub fn parse_reply(category: Category, raw: &str) -> Result<ExtractedFields> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::MalformedModelOutput(format!("reply is not valid JSON: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| AppError::MalformedModelOutput("reply is not a JSON object".to_string()))?;

    let fields = match category {
        Category::Personal => ExtractedFields::Personal(PersonalFields {
            title: string_field(object, "title")?,
        }),
        Category::Research => ExtractedFields::Research(ResearchFields {
            title: string_field(object, "title")?,
            tags: string_field(object, "tags")?,
            tldr: string_field(object, "tldr")?,
            relevance: string_field(object, "relevance")?,
        }),
        Category::Shopping => ExtractedFields::Shopping(ShoppingFields {
            name: string_field(object, "name")?,
            price: numeric_field(object, "price")?,
            url: string_field(object, "url")?,
            urgency: string_field(object, "urgency")?,
            description: string_field(object, "description")?,
        }),
    };

    Ok(fields)
}

fn field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| AppError::MalformedModelOutput(format!("missing key \"{}\"", key)))
}

fn string_field(object: &Map<String, Value>, key: &str) -> Result<String> {
    field(object, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::MalformedModelOutput(format!("key \"{}\" is not a string", key)))
}

/// Accepts a JSON number or a string holding one.
fn numeric_field(object: &Map<String, Value>, key: &str) -> Result<f64> {
    let value = field(object, key)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| AppError::Coercion(format!("\"{}\" is not numeric: {}", key, value)))
}
