//! # Company LLM SDK
//!
//! A small provider-agnostic LLM client layer with an OpenAI Chat Completions backend.
//!
//! ## Example
//!
//! ```rust,no_run
//! use company_llm_sdk::client::LlmClient;
//! use company_llm_sdk::openai::OpenAIClient;
//! use company_llm_sdk::types::{CompletionRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAIClient::new("your-api-key")?;
//!     let request = CompletionRequest::new(
//!         "gpt-4o-mini",
//!         vec![
//!             Message::system("You are a helpful assistant."),
//!             Message::user("Hello!"),
//!         ],
//!     );
//!     let response = client.complete(request).await?;
//!
//!     println!("Response: {}", response.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod openai;
pub mod providers;
pub mod types;

#[cfg(test)]
mod tests {
    use crate::openai::{
        client::OpenAIClient,
        types::{OpenAIMessage, OpenAIRole},
    };
    use crate::types::{CompletionResponse, ContentBlock, Message, Role, Usage};

    #[test]
    fn test_openai_client_creation() {
        let client = OpenAIClient::new("test-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_openai_client_creation_empty_key() {
        let client = OpenAIClient::new("");
        assert!(client.is_err());
    }

    #[test]
    fn test_openai_message_creation() {
        let message = OpenAIMessage::new(OpenAIRole::User, "Hello");
        assert_eq!(message.role, OpenAIRole::User);
        assert_eq!(message.content.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_generic_message_creation() {
        let message = Message::system("Be brief");
        assert_eq!(message.role, Role::System);
        assert_eq!(message.text_content(), "Be brief");
    }

    #[test]
    fn test_completion_response_text() {
        let response = CompletionResponse {
            content: vec![
                ContentBlock::Text {
                    text: "Acme ".to_string(),
                },
                ContentBlock::Text {
                    text: "sells widgets.".to_string(),
                },
            ],
            role: Role::Assistant,
            usage: Usage {
                input_tokens: 1,
                output_tokens: 2,
            },
            stop_reason: Some("stop".to_string()),
        };
        assert_eq!(response.text().as_deref(), Some("Acme sells widgets."));

        let empty = CompletionResponse {
            content: vec![],
            ..response
        };
        assert_eq!(empty.text(), None);
    }
}
