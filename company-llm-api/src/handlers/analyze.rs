use crate::error::AnalysisError;
use crate::helpers::analysis::generate_llm_response;
use crate::models::{CompanyQuery, ErrorResponse, LlmResponse};
use actix_web::{post, web, HttpResponse, Responder};
use company_llm_sdk::client::LlmClient;
use std::sync::Arc;
use tracing::{error, info, warn};

#[post("/analyze")]
pub async fn analyze_company(
    req: web::Json<CompanyQuery>,
    llm_client: web::Data<Arc<dyn LlmClient>>,
) -> impl Responder {
    let query = req.into_inner();
    info!(
        company_name = %query.company_name,
        query = %query.query,
        has_context = query.additional_context.is_some(),
        "Analyzing company"
    );

    let result = generate_llm_response(
        llm_client.get_ref().as_ref(),
        &query.company_name,
        &query.query,
        query.additional_context.as_ref(),
    )
    .await;

    match result {
        Ok(analysis) => HttpResponse::Ok().json(LlmResponse {
            company_name: query.company_name,
            query: query.query,
            response: analysis.response,
            confidence_score: analysis.confidence_score,
        }),
        Err(e) => error_response(&e),
    }
}

fn error_response(e: &AnalysisError) -> HttpResponse {
    match e {
        AnalysisError::CompanyNotFound(company_name) => {
            warn!(company_name = %company_name, "Company not found");
            HttpResponse::NotFound().json(ErrorResponse {
                detail: e.to_string(),
            })
        }
        AnalysisError::Llm(_) | AnalysisError::EmptyCompletion => {
            error!(error = %e, "Company analysis failed");
            HttpResponse::InternalServerError().json(ErrorResponse {
                detail: format!("An error occurred: {}", e),
            })
        }
    }
}
