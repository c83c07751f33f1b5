use crate::error::AnalysisError;
use company_llm_sdk::client::LlmClient;
use company_llm_sdk::models::openai::GPT_4O_MINI_ID;
use company_llm_sdk::types::{CompletionRequest, Message};
use serde_json::{Map, Value};
use tracing::info;

pub const MODEL: &str = GPT_4O_MINI_ID;

pub const SYSTEM_PROMPT: &str =
    "You are an assistant that supports desk research on companies and services.";

/// Placeholder; the provider does not report a confidence signal
pub const CONFIDENCE_SCORE: f64 = 0.95;

pub const NO_CONTEXT_MARKER: &str = "none";

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub response: String,
    pub confidence_score: f64,
}

/// Render the optional context for the prompt. Absent and empty maps both become the marker.
pub fn render_context(context: Option<&Map<String, Value>>) -> String {
    match context {
        Some(map) if !map.is_empty() => Value::Object(map.clone()).to_string(),
        _ => NO_CONTEXT_MARKER.to_string(),
    }
}

pub fn build_prompt(
    company_name: &str,
    query: &str,
    context: Option<&Map<String, Value>>,
) -> String {
    format!(
        "Answer the following question about {company_name}.\n\
         Question: {query}\n\
         \n\
         Additional context: {}",
        render_context(context)
    )
}

/// Single chat completion: fixed system instruction plus the interpolated prompt
pub async fn generate_llm_response(
    llm_client: &dyn LlmClient,
    company_name: &str,
    query: &str,
    context: Option<&Map<String, Value>>,
) -> Result<Analysis, AnalysisError> {
    let prompt = build_prompt(company_name, query, context);

    let request = CompletionRequest::new(
        MODEL,
        vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
    );

    let response = llm_client.complete(request).await?;
    info!(
        provider = llm_client.provider_name(),
        response = ?response,
        "LLM provider response"
    );

    let text = response.text().ok_or(AnalysisError::EmptyCompletion)?;

    Ok(Analysis {
        response: text,
        confidence_score: CONFIDENCE_SCORE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_prompt_without_context_uses_marker() {
        let prompt = build_prompt("Acme", "What do they sell?", None);
        assert!(prompt.contains("Acme"));
        assert!(prompt.contains("Question: What do they sell?"));
        assert!(prompt.ends_with("Additional context: none"));
    }

    #[test]
    fn test_empty_context_is_treated_as_absent() {
        let empty = Map::new();
        assert_eq!(render_context(Some(&empty)), "none");
    }

    #[test]
    fn test_context_is_rendered_as_json() {
        let ctx = context(json!({
            "industry": "manufacturing",
            "employees": 120,
            "listed": false,
            "hq": {"city": "Osaka"}
        }));

        let rendered = render_context(Some(&ctx));
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["employees"], 120);
        assert_eq!(parsed["hq"]["city"], "Osaka");

        let prompt = build_prompt("Acme", "Who are their competitors?", Some(&ctx));
        assert!(prompt.contains(&format!("Additional context: {rendered}")));
    }
}
