//! Notion page properties and the per-category mapping onto them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::extract::{ExtractedFields, PersonalFields, ResearchFields, ShoppingFields};

/// Relevance is triaged by hand in Notion, never by the model.
pub const UNASSIGNED_RELEVANCE: &str = "Unassigned";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichText {
    pub text: TextContent,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: TextContent { content: content.into(), link: None },
        }
    }

    pub fn linked(url: &str) -> Self {
        Self {
            text: TextContent {
                content: url.to_string(),
                link: Some(Link { url: url.to_string() }),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateValue {
    pub start: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub name: String,
}

/// A typed property value, serialized the way the Notion pages API expects,
/// e.g. `{"number": 12.5}` or `{"multi_select": [{"name": "Low"}]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Url(String),
    Date(DateValue),
    MultiSelect(Vec<SelectOption>),
    Number(f64),
    Checkbox(bool),
}

impl PropertyValue {
    fn title(content: impl Into<String>) -> Self {
        PropertyValue::Title(vec![RichText::plain(content)])
    }

    fn text(content: impl Into<String>) -> Self {
        PropertyValue::RichText(vec![RichText::plain(content)])
    }

    fn tag(name: impl Into<String>) -> Self {
        PropertyValue::MultiSelect(vec![SelectOption { name: name.into() }])
    }

    fn date(at: DateTime<Utc>) -> Self {
        PropertyValue::Date(DateValue { start: at.to_rfc3339() })
    }
}

/// The properties of one page to be created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    properties: BTreeMap<&'static str, PropertyValue>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

impl<const N: usize> From<[(&'static str, PropertyValue); N]> for Record {
    fn from(properties: [(&'static str, PropertyValue); N]) -> Self {
        Self {
            properties: BTreeMap::from(properties),
        }
    }
}

/// Maps extracted fields onto the database schema of their category. The
/// request url and `now` are always injected here, never taken from the model.
pub fn map_record(fields: ExtractedFields, url: &str, now: DateTime<Utc>) -> Record {
    match fields {
        ExtractedFields::Personal(fields) => personal(fields, url, now),
        ExtractedFields::Research(fields) => research(fields, url, now),
        ExtractedFields::Shopping(fields) => shopping(fields, url, now),
    }
}

fn personal(fields: PersonalFields, url: &str, now: DateTime<Utc>) -> Record {
    Record::from([
        ("Name", PropertyValue::title(fields.title.trim())),
        ("URL", PropertyValue::RichText(vec![RichText::linked(url)])),
        ("Date", PropertyValue::date(now)),
    ])
}

fn research(fields: ResearchFields, url: &str, now: DateTime<Utc>) -> Record {
    Record::from([
        ("Title", PropertyValue::title(fields.title)),
        ("Tags", PropertyValue::tag(fields.tags)),
        ("TL;DR", PropertyValue::text(fields.tldr)),
        ("Relevance", PropertyValue::tag(UNASSIGNED_RELEVANCE)),
        ("Link", PropertyValue::Url(url.to_string())),
        ("Date", PropertyValue::date(now)),
    ])
}

fn shopping(fields: ShoppingFields, url: &str, now: DateTime<Utc>) -> Record {
    Record::from([
        ("Name", PropertyValue::title(fields.name)),
        ("Price", PropertyValue::Number(fields.price)),
        ("URL", PropertyValue::Url(url.to_string())),
        ("Urgency", PropertyValue::tag(fields.urgency)),
        ("Description", PropertyValue::text(fields.description)),
        ("Purchased", PropertyValue::Checkbox(false)),
        ("Date", PropertyValue::date(now)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn research_record_ignores_model_relevance() {
        let fields = ExtractedFields::Research(ResearchFields {
            title: "T".into(),
            tags: "Article".into(),
            tldr: "S".into(),
            relevance: "Essential reading for everyone".into(),
        });
        let record = map_record(fields, "https://example.com/paper", now());

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "Title": {"title": [{"text": {"content": "T"}}]},
                "Tags": {"multi_select": [{"name": "Article"}]},
                "TL;DR": {"rich_text": [{"text": {"content": "S"}}]},
                "Relevance": {"multi_select": [{"name": "Unassigned"}]},
                "Link": {"url": "https://example.com/paper"},
                "Date": {"date": {"start": "2024-05-17T09:30:00+00:00"}}
            })
        );
    }

    #[test]
    fn shopping_record_uses_request_url_and_starts_unpurchased() {
        let fields = ExtractedFields::Shopping(ShoppingFields {
            name: "Desk lamp".into(),
            price: 34.5,
            url: "https://model-made-this-up.example".into(),
            urgency: "High".into(),
            description: "Warm light".into(),
        });
        let record = map_record(fields, "https://shop.example/lamp", now());

        assert_eq!(serde_json::to_value(&record).unwrap().as_object().unwrap().len(), 7);
        assert_eq!(record.get("URL"), Some(&PropertyValue::Url("https://shop.example/lamp".into())));
        assert_eq!(record.get("Price"), Some(&PropertyValue::Number(34.5)));
        assert_eq!(record.get("Purchased"), Some(&PropertyValue::Checkbox(false)));
        assert_eq!(
            serde_json::to_value(record.get("Urgency").unwrap()).unwrap(),
            json!({"multi_select": [{"name": "High"}]})
        );
    }

    #[test]
    fn personal_record_links_the_url() {
        let fields = ExtractedFields::Personal(PersonalFields { title: "  Rust Blog \n".into() });
        let record = map_record(fields, "https://blog.rust-lang.org", now());

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "Name": {"title": [{"text": {"content": "Rust Blog"}}]},
                "URL": {"rich_text": [{"text": {
                    "content": "https://blog.rust-lang.org",
                    "link": {"url": "https://blog.rust-lang.org"}
                }}]},
                "Date": {"date": {"start": "2024-05-17T09:30:00+00:00"}}
            })
        );
    }
}
