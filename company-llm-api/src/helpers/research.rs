use crate::error::AnalysisError;
use crate::helpers::analysis::MODEL;
use anyhow::Context;
use company_llm_sdk::client::LlmClient;
use company_llm_sdk::types::{CompletionRequest, Message};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub const RESEARCH_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that provides accurate company information.";

pub const DEFAULT_OUTPUT_FILE: &str = "company_info.json";

/// Profile fields requested for each company; any of them may be absent from the reply
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CompanyInfo {
    pub industry: Option<String>,
    pub size: Option<String>,
    pub revenue: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
}

impl CompanyInfo {
    /// Store `value` under a known profile key. Unknown keys are ignored.
    fn set(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "industry" => &mut self.industry,
            "size" => &mut self.size,
            "revenue" => &mut self.revenue,
            "website_url" => &mut self.website_url,
            "description" => &mut self.description,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// One row of the research table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompanyRecord {
    pub company_name: String,
    #[serde(flatten)]
    pub info: CompanyInfo,
}

pub fn research_prompt(company_name: &str) -> String {
    format!(
        "Provide the following information for {company_name}: industry, size, revenue, \
         website_url, brief description. Format the response as a JSON object with these keys."
    )
}

/// Parse a model reply into a profile.
///
/// Code fences are stripped and missing outer braces restored before parsing as JSON.
/// Replies that still are not JSON fall back to `key: value` lines. Returns `None` when
/// no known key could be recovered.
pub fn parse_company_info(raw: &str) -> Option<CompanyInfo> {
    let cleaned = strip_fences(raw);

    match serde_json::from_str::<Map<String, Value>>(&cleaned) {
        Ok(fields) => {
            let mut info = CompanyInfo::default();
            let mut found = false;
            for (key, value) in fields {
                if let Some(value) = scalar_text(value) {
                    found |= info.set(&key, value);
                }
            }
            found.then_some(info)
        }
        Err(e) => {
            warn!(error = %e, raw = %cleaned, "Reply is not JSON, reading key/value lines");
            parse_key_value_lines(&cleaned)
        }
    }
}

fn strip_fences(raw: &str) -> String {
    let body = raw.trim().replace("```json", "").replace("```", "");
    let body = body.trim();

    let mut cleaned = String::with_capacity(body.len() + 2);
    if !body.starts_with('{') {
        cleaned.push('{');
    }
    cleaned.push_str(body);
    if !body.ends_with('}') {
        cleaned.push('}');
    }
    cleaned
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn parse_key_value_lines(text: &str) -> Option<CompanyInfo> {
    let mut info = CompanyInfo::default();
    let mut found = false;

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().trim_start_matches('{').replace('"', "");
        let value = value
            .trim()
            .trim_end_matches('}')
            .trim_end()
            .trim_end_matches(',')
            .replace('"', "");
        found |= info.set(key.trim(), value.trim().to_string());
    }

    found.then_some(info)
}

/// Ask the provider for one company's profile
pub async fn research_company(
    llm_client: &dyn LlmClient,
    company_name: &str,
) -> Result<Option<CompanyInfo>, AnalysisError> {
    let request = CompletionRequest::new(
        MODEL,
        vec![
            Message::system(RESEARCH_SYSTEM_PROMPT),
            Message::user(research_prompt(company_name)),
        ],
    );

    let response = llm_client.complete(request).await?;
    let text = response.text().unwrap_or_default();

    Ok(parse_company_info(&text))
}

/// Research each company in order. Failed or unparseable companies are logged and left out.
pub async fn research_companies(
    llm_client: &dyn LlmClient,
    companies: &[String],
) -> Vec<CompanyRecord> {
    let mut records = Vec::with_capacity(companies.len());

    for company in companies {
        info!(company = %company, "Collecting company information");
        match research_company(llm_client, company).await {
            Ok(Some(info)) => records.push(CompanyRecord {
                company_name: company.clone(),
                info,
            }),
            Ok(None) => warn!(company = %company, "Failed to parse company information"),
            Err(e) => warn!(company = %company, error = %e, "Company research failed"),
        }
    }

    records
}

pub fn write_records(records: &[CompanyRecord], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;

    info!(path = %path.display(), rows = records.len(), "Company information written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_is_parsed() {
        let raw = "```json\n{\n  \"industry\": \"Technology\",\n  \"size\": \"Large\",\n  \"revenue\": \"$394B\",\n  \"website_url\": \"https://www.apple.com\",\n  \"description\": \"Consumer electronics.\"\n}\n```";

        let info = parse_company_info(raw).unwrap();
        assert_eq!(info.industry.as_deref(), Some("Technology"));
        assert_eq!(info.website_url.as_deref(), Some("https://www.apple.com"));
        assert_eq!(info.description.as_deref(), Some("Consumer electronics."));
    }

    #[test]
    fn test_missing_braces_are_restored() {
        let raw = r#""industry": "Retail", "size": "Large""#;

        let info = parse_company_info(raw).unwrap();
        assert_eq!(info.industry.as_deref(), Some("Retail"));
        assert_eq!(info.size.as_deref(), Some("Large"));
        assert_eq!(info.revenue, None);
    }

    #[test]
    fn test_non_string_values_are_kept_as_text() {
        let raw = r#"{"industry": "Software", "revenue": 211915000000, "size": null}"#;

        let info = parse_company_info(raw).unwrap();
        assert_eq!(info.revenue.as_deref(), Some("211915000000"));
        assert_eq!(info.size, None);
    }

    #[test]
    fn test_key_value_lines_are_read_when_json_fails() {
        let raw = "industry: E-commerce,\n\"size\": \"Very large\",\nwebsite_url: https://www.amazon.com\nnotes: ignored";

        let info = parse_company_info(raw).unwrap();
        assert_eq!(info.industry.as_deref(), Some("E-commerce"));
        assert_eq!(info.size.as_deref(), Some("Very large"));
        assert_eq!(info.website_url.as_deref(), Some("https://www.amazon.com"));
    }

    #[test]
    fn test_reply_without_known_keys_is_rejected() {
        assert_eq!(parse_company_info("I could not find that company."), None);
        assert_eq!(parse_company_info(""), None);
        assert_eq!(parse_company_info(r#"{"ceo": "Someone"}"#), None);
    }

    #[test]
    fn test_record_flattens_profile() {
        let record = CompanyRecord {
            company_name: "Acme".to_string(),
            info: CompanyInfo {
                industry: Some("Widgets".to_string()),
                ..CompanyInfo::default()
            },
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["company_name"], "Acme");
        assert_eq!(json["industry"], "Widgets");
        assert!(json["size"].is_null());
    }
}
