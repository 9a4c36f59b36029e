use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
};
use uuid::Uuid;

use crate::ai::client::ModelApi;
use crate::models::{ErrorResponse, GenerationResult, PromptRequest};
use crate::state::AppState;

pub fn routes<C: ModelApi + 'static>() -> Router<AppState<C>> {
    Router::new().route("/api/test-cases", post(generate_test_cases))
}

async fn generate_test_cases<C: ModelApi + 'static>(
    State(state): State<AppState<C>>,
    Json(payload): Json<PromptRequest>,
) -> Result<Json<GenerationResult>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    log::info!(
        "[{request_id}] Generation request ({} chars)",
        payload.prompt.len()
    );

    match state.handler.handle(request_id, &payload.prompt).await {
        Ok(result) => {
            log::info!("[{request_id}] Returning {} test cases", result.test_cases.len());
            Ok(Json(result))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "INTERNAL_ERROR".to_string(),
                message: e.to_string(),
            }),
        )),
    }
}
