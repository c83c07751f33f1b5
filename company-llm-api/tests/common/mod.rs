#![allow(dead_code)]

use actix_web::{test, web, App};
use company_llm_api::config::CorsConfig;
use company_llm_sdk::client::LlmClient;
use company_llm_sdk::error::LlmError;
use company_llm_sdk::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use std::sync::{Arc, Mutex};

pub struct TestApp<S> {
    pub mock_llm_client: Arc<MockLlmClient>,
    pub app: S,
}

/// Provider stand-in that records every request and replays queued results
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<Result<CompletionResponse, LlmError>>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        MockLlmClient {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push_response(&self, response: CompletionResponse) {
        self.responses.lock().unwrap().push(Ok(response));
    }

    pub fn push_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push(Err(error));
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(create_completion_response_with_text("Acme sells widgets."))
        } else {
            responses.remove(0)
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn create_completion_response_with_text(text: &str) -> CompletionResponse {
    CompletionResponse {
        content: vec![ContentBlock::Text {
            text: text.to_string(),
        }],
        role: Role::Assistant,
        usage: Usage {
            input_tokens: 10,
            output_tokens: 20,
        },
        stop_reason: Some("stop".to_string()),
    }
}

pub fn create_empty_completion_response() -> CompletionResponse {
    CompletionResponse {
        content: vec![],
        role: Role::Assistant,
        usage: Usage {
            input_tokens: 10,
            output_tokens: 0,
        },
        stop_reason: Some("content_filter".to_string()),
    }
}

pub async fn setup_test_app() -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
    >,
> {
    let mock_llm_client = Arc::new(MockLlmClient::new());
    let llm_client = mock_llm_client.clone() as Arc<dyn LlmClient>;

    let app = test::init_service(
        App::new()
            .wrap(company_llm_api::cors(&CorsConfig::default()))
            .app_data(web::Data::new(llm_client))
            .configure(company_llm_api::configure_routes),
    )
    .await;

    TestApp {
        mock_llm_client,
        app,
    }
}
