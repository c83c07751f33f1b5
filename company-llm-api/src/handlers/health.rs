use crate::models::HealthResponse;
use actix_web::{get, HttpResponse, Responder};

pub const HEALTH_MESSAGE: &str = "Company LLM API is running";

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}
