//! Model constants for the supported chat-completion provider
//!
//! Model IDs are sourced from the provider's official documentation.

/// OpenAI model constants
pub mod openai {
    /// GPT-4o Mini - Small, fast and inexpensive chat model
    pub const GPT_4O_MINI_ID: &str = "gpt-4o-mini";
}
