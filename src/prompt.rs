//! Prompt templates, one per category.
//!
//! The wording here is the only contract the model sees, so the key names
//! must match what `extract` reads back.

use crate::category::Category;

pub const RESEARCH_TAGS: [&str; 4] = ["Other", "Research paper", "Article", "Book"];
pub const SHOPPING_URGENCY: [&str; 3] = ["Low", "Medium", "High"];

const JSON_ONLY: &str = "Reply with the JSON object only. Do not wrap it in markdown code fences and do not add any text before or after it.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: Option<String>,
    pub user: String,
}

fn quoted(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prompt(category: Category, url: &str) -> Prompt {
    match category {
        Category::Personal => Prompt {
            system: Some("You help me keep a tidy list of bookmarks.".to_string()),
            user: format!(
                "I'm creating a bookmark for the page at {url}. Decide what its title should be.\n\n\
                 Respond with a JSON object with exactly one key:\n\
                 - \"title\": a short, descriptive title for the page\n\n\
                 {JSON_ONLY}"
            ),
        },
        Category::Research => Prompt {
            system: Some(
                "You are a research assistant who catalogues papers, articles and books.".to_string(),
            ),
            user: format!(
                "Read the resource at {url} and describe it for my reading list.\n\n\
                 Respond with a JSON object with exactly these keys:\n\
                 - \"title\": the title of the resource\n\
                 - \"tags\": exactly one of {tags}\n\
                 - \"tldr\": a summary of two or three sentences\n\
                 - \"relevance\": one sentence on why it is worth reading\n\n\
                 {JSON_ONLY}",
                tags = quoted(&RESEARCH_TAGS),
            ),
        },
        Category::Shopping => Prompt {
            system: Some("You are a shopping assistant who tracks items on a wish list.".to_string()),
            user: format!(
                "Look at the product page at {url} and describe the item.\n\n\
                 Respond with a JSON object with exactly these keys:\n\
                 - \"name\": the product name\n\
                 - \"price\": the price as a plain number, without currency symbols\n\
                 - \"url\": the url of the product page\n\
                 - \"urgency\": exactly one of {urgency}\n\
                 - \"description\": a one or two sentence description of the item\n\n\
                 {JSON_ONLY}",
                urgency = quoted(&SHOPPING_URGENCY),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/thing";

    #[test]
    fn every_prompt_mentions_url_and_demands_bare_json() {
        for category in Category::ALL {
            let prompt = build_prompt(category, URL);
            assert!(prompt.user.contains(URL), "{category}");
            assert!(prompt.user.contains("JSON object only"), "{category}");
            assert!(prompt.user.contains("code fences"), "{category}");
            assert!(prompt.system.is_some());
        }
    }

    #[test]
    fn research_prompt_lists_keys_and_tags() {
        let prompt = build_prompt(Category::Research, URL);
        for key in ["\"title\"", "\"tags\"", "\"tldr\"", "\"relevance\""] {
            assert!(prompt.user.contains(key), "missing {key}");
        }
        assert!(prompt
            .user
            .contains("\"Other\", \"Research paper\", \"Article\", \"Book\""));
    }

    #[test]
    fn shopping_prompt_lists_keys_and_urgency() {
        let prompt = build_prompt(Category::Shopping, URL);
        for key in ["\"name\"", "\"price\"", "\"url\"", "\"urgency\"", "\"description\""] {
            assert!(prompt.user.contains(key), "missing {key}");
        }
        assert!(prompt.user.contains("\"Low\", \"Medium\", \"High\""));
    }
}
