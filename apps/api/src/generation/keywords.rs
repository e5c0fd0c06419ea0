//! Keyword Suggestion: asks the generation collaborator for Amazon search
//! keywords in structured-output mode.
//!
//! Suggestions are advisory: the user copies what they want into the keyword
//! list. Nothing here touches the session.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::generation::builder::fill_template;
use crate::generation::prompts::{KEYWORD_PROMPT, KEYWORD_SYSTEM};
use crate::llm_client::{complete_json, GenerationClient, LlmError};
use crate::models::category::Category;
use crate::sheet::{CanonicalField, ProductRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSuggestion {
    pub keyword: String,
    /// short-tail, long-tail, generic, or brand.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub search_intent: String,
}

#[derive(Debug, Deserialize)]
struct SuggestionEnvelope {
    #[serde(default)]
    keywords: Vec<KeywordSuggestion>,
}

pub fn keyword_prompt(record: &ProductRecord, category: Category) -> String {
    fill_template(KEYWORD_PROMPT, |name| match name {
        "category" => Some(Cow::Borrowed(category.as_str())),
        _ => CanonicalField::from_key(name).map(|f| Cow::Borrowed(record.prompt_value(f))),
    })
}

/// Requests suggestions and cleans them: blank keywords are dropped and
/// duplicates (case-insensitive) keep their first occurrence.
pub async fn suggest_keywords(
    client: &dyn GenerationClient,
    record: &ProductRecord,
    category: Category,
) -> Result<Vec<KeywordSuggestion>, LlmError> {
    let prompt = keyword_prompt(record, category);
    let envelope: SuggestionEnvelope = complete_json(client, KEYWORD_SYSTEM, &prompt).await?;

    let returned = envelope.keywords.len();
    let suggestions = clean_suggestions(envelope.keywords);
    if suggestions.is_empty() {
        warn!("Keyword suggestion returned no usable keywords ({returned} raw)");
    } else {
        info!(
            "Suggested {} keywords for '{}'",
            suggestions.len(),
            record.get(CanonicalField::ProductName)
        );
    }
    Ok(suggestions)
}

fn clean_suggestions(raw: Vec<KeywordSuggestion>) -> Vec<KeywordSuggestion> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::with_capacity(raw.len());
    for mut suggestion in raw {
        suggestion.keyword = suggestion.keyword.trim().to_string();
        if suggestion.keyword.is_empty() {
            continue;
        }
        let folded = suggestion.keyword.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        out.push(suggestion);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::ResponseMode;
    use crate::sheet::normalizer::normalize;
    use crate::sheet::reader::RawPair;

    struct Scripted {
        reply: Result<&'static str, ()>,
        prompts: Mutex<Vec<(String, ResponseMode)>>,
    }

    impl Scripted {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply: Ok(reply),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationClient for Scripted {
        async fn complete(
            &self,
            _system: &str,
            user: &str,
            mode: ResponseMode,
        ) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push((user.to_string(), mode));
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(LlmError::EmptyContent),
            }
        }
    }

    fn record() -> ProductRecord {
        normalize(
            [("Product Name", "Vitamin C Serum"), ("Brand Name", "Seoulskin")]
                .iter()
                .map(|(l, v)| RawPair {
                    label: l.to_string(),
                    value: v.to_string(),
                }),
        )
        .unwrap()
    }

    #[test]
    fn test_prompt_uses_selected_category_and_fields() {
        let prompt = keyword_prompt(&record(), Category::Electronics);
        assert!(prompt.contains("for this Electronics product"));
        assert!(prompt.contains("Product: Vitamin C Serum"));
        assert!(prompt.contains("Brand: Seoulskin"));
        // The JSON schema example survives substitution.
        assert!(prompt.contains("\"keywords\": ["));
    }

    #[tokio::test]
    async fn test_suggestions_are_cleaned() {
        let client = Scripted::replying(
            r#"{"keywords":[
                {"keyword":"vitamin c serum","type":"short-tail","search_intent":"commercial"},
                {"keyword":"  ","type":"generic","search_intent":"informational"},
                {"keyword":"Vitamin C Serum","type":"short-tail","search_intent":"commercial"},
                {"keyword":"serum for glowing skin","type":"long-tail"}
            ]}"#,
        );

        let out = suggest_keywords(&client, &record(), Category::Beauty)
            .await
            .unwrap();

        let keywords: Vec<_> = out.iter().map(|s| s.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["vitamin c serum", "serum for glowing skin"]);
        assert_eq!(out[1].kind, "long-tail");
        assert_eq!(out[1].search_intent, "");

        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].1, ResponseMode::JsonObject);
    }

    #[tokio::test]
    async fn test_missing_keywords_array_is_empty_not_error() {
        let client = Scripted::replying("{}");
        let out = suggest_keywords(&client, &record(), Category::Beauty)
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_collaborator_failure_propagates() {
        let client = Scripted {
            reply: Err(()),
            prompts: Mutex::new(Vec::new()),
        };
        let err = suggest_keywords(&client, &record(), Category::Beauty)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[test]
    fn test_suggestion_serializes_type_field() {
        let s = KeywordSuggestion {
            keyword: "k".into(),
            kind: "generic".into(),
            search_intent: "commercial".into(),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "generic");
    }
}
