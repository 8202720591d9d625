//! HTTP API for traitscope
//!
//! Stateless: every request is scored from its own body and nothing is kept
//! server-side.
//!
//! Endpoints:
//! - GET /health - Health check
//! - GET /traits?q= - Trait guide, optionally filtered
//! - GET /traits/:id - One trait
//! - GET /questions/:stage - Questions for stage 1 or 2
//! - POST /score/stage1 - Stage-1 signal and preview
//! - POST /score/stage2 - Full result envelope

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::core::envelope::EnvelopeGenerator;
use crate::core::question_bank::{questions_for, stage1_questions, stage2_questions};
use crate::core::scoring::preview_stage1;
use crate::core::taxonomy::{self, TraitMeta};
use crate::types::{AnswerMap, Question, ResultEnvelope, Stage, Stage1Preview, TraitId};

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Guide search query
#[derive(Debug, Deserialize)]
pub struct TraitQuery {
    pub q: Option<String>,
}

/// Stage-1 scoring request
#[derive(Debug, Deserialize)]
pub struct Stage1Request {
    #[serde(default)]
    pub answers: AnswerMap,
}

/// Stage-2 scoring request
#[derive(Debug, Deserialize)]
pub struct Stage2Request {
    #[serde(default)]
    pub stage1_answers: AnswerMap,
    pub stage2_answers: AnswerMap,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub reason: String,
}

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/traits", get(list_traits))
        .route("/traits/:id", get(get_trait))
        .route("/questions/:stage", get(get_questions))
        .route("/score/stage1", post(score_stage1))
        .route("/score/stage2", post(score_stage2))
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Trait guide, filtered by `q`
async fn list_traits(Query(query): Query<TraitQuery>) -> Json<Vec<&'static TraitMeta>> {
    Json(taxonomy::search(query.q.as_deref().unwrap_or("")))
}

/// Single trait
async fn get_trait(Path(id): Path<String>) -> Result<Json<&'static TraitMeta>, StatusCode> {
    let trait_id = TraitId::parse(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(taxonomy::meta(trait_id)))
}

/// Questions for a stage
async fn get_questions(Path(stage): Path<u8>) -> Result<Json<&'static [Question]>, StatusCode> {
    let stage = Stage::try_from(stage).map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Json(questions_for(stage)))
}

/// Stage-1 signal and preview
async fn score_stage1(Json(req): Json<Stage1Request>) -> Json<Stage1Preview> {
    Json(preview_stage1(stage1_questions(), &req.answers))
}

/// Full result envelope
async fn score_stage2(Json(req): Json<Stage2Request>) -> Response {
    let result = EnvelopeGenerator::new().generate(
        &req.stage1_answers,
        &req.stage2_answers,
        stage2_questions(),
    );

    match result.envelope {
        Some(envelope) => {
            tracing::debug!(top = ?envelope.top3.first().map(|s| s.trait_id), "scored stage 2");
            (StatusCode::OK, Json::<ResultEnvelope>(envelope)).into_response()
        }
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: result.reason.description().to_string(),
                reason: result.reason.code().to_string(),
            }),
        )
            .into_response(),
    }
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "traitscope API listening");
    println!("traitscope API running on {}", addr);
    println!("  GET  /health            - Health check");
    println!("  GET  /traits?q=         - Trait guide");
    println!("  GET  /traits/:id        - One trait");
    println!("  GET  /questions/:stage  - Questions (1 or 2)");
    println!("  POST /score/stage1      - Stage-1 signal + preview");
    println!("  POST /score/stage2      - Full result");
    axum::serve(listener, router).await?;
    Ok(())
}
