use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Question about a company, as posted to `/analyze`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "RawCompanyQuery")]
pub struct CompanyQuery {
    pub company_name: String,
    pub query: String,
    /// Free-form key/value pairs interpolated into the prompt
    pub additional_context: Option<Map<String, Value>>,
}

// Required fields are optional here so every absent one can be reported at once
#[derive(Deserialize)]
pub struct RawCompanyQuery {
    company_name: Option<String>,
    query: Option<String>,
    #[serde(default)]
    additional_context: Option<Map<String, Value>>,
}

#[derive(Debug, Error)]
pub enum MissingFields {
    #[error("missing field `{0}`")]
    One(&'static str),
    #[error("missing fields {}", .0.iter().map(|f| format!("`{f}`")).collect::<Vec<_>>().join(", "))]
    Many(Vec<&'static str>),
}

impl TryFrom<RawCompanyQuery> for CompanyQuery {
    type Error = MissingFields;

    fn try_from(raw: RawCompanyQuery) -> Result<Self, Self::Error> {
        match (raw.company_name, raw.query) {
            (Some(company_name), Some(query)) => Ok(Self {
                company_name,
                query,
                additional_context: raw.additional_context,
            }),
            (None, Some(_)) => Err(MissingFields::One("company_name")),
            (Some(_), None) => Err(MissingFields::One("query")),
            (None, None) => Err(MissingFields::Many(vec!["company_name", "query"])),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LlmResponse {
    pub company_name: String,
    pub query: String,
    pub response: String,
    pub confidence_score: f64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ValidationErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationErrorDetail>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub message: String,
}
