use company_llm_sdk::error::LlmError;
use thiserror::Error;

/// Failure while producing an answer for `/analyze`
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No company directory exists yet, so nothing returns this today
    #[error("Company '{0}' not found")]
    CompanyNotFound(String),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("LLM returned no text content")]
    EmptyCompletion,
}
