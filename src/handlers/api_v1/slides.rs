use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::gateway::SharedGateway;
use crate::models::session_state::SubmitError;
use crate::session::{SessionStore, deck_id};
use crate::templates_structs::ApiErrorResponse;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

/// POST /api/v1/slides - Generate three slide versions; stateless
pub async fn generate(
    gateway: web::Data<SharedGateway>,
    body: web::Json<GenerateRequest>,
) -> HttpResponse {
    if body.text.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(ApiErrorResponse::new(SubmitError::EmptyInput.to_string()));
    }

    match gateway.generate(&body.text).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => HttpResponse::BadGateway().json(ApiErrorResponse::from(e)),
    }
}

/// GET /api/v1/session - Current presentation state of the caller's session
pub async fn session_state(
    store: web::Data<SessionStore>,
    session: Session,
) -> HttpResponse {
    HttpResponse::Ok().json(store.snapshot(&deck_id(&session)))
}
