use crate::config::ApiConfig;
use anyhow::anyhow;
use company_llm_sdk::client::LlmClient;
use company_llm_sdk::openai::OpenAIClient;
use std::env;
use std::sync::Arc;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Build the process-wide provider client. The environment wins over the config file.
pub fn create_llm_client(config: &ApiConfig) -> anyhow::Result<Arc<dyn LlmClient>> {
    let api_key = env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| config.openai_api_key().map(str::to_string))
        .ok_or_else(|| {
            anyhow!(
                "No API key found. Set {} in .env.local or api_keys.openai_api_key in the config file.",
                API_KEY_ENV
            )
        })?;

    let mut client = OpenAIClient::new(api_key)?;
    if let Some(base_url) = &config.llm.base_url {
        client = client.with_base_url(base_url);
    }

    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, ApiKeysConfig};

    #[test]
    fn test_client_from_config_key() {
        let config = ApiConfig {
            api_keys: Some(ApiKeysConfig {
                openai_api_key: Some("sk-from-file".to_string()),
            }),
            ..ApiConfig::default()
        };

        let client = create_llm_client(&config).unwrap();
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.model_name(), "gpt-4o-mini");
    }

    #[test]
    fn test_missing_key_is_reported() {
        if env::var(API_KEY_ENV).is_ok() {
            return;
        }

        let err = create_llm_client(&ApiConfig::default()).err().unwrap();
        assert!(err.to_string().contains(API_KEY_ENV));
    }
}
