use crate::dtos::{CandidateRecord, UpsertCandidateResponse};
use crate::error::AppError;
use crate::models::Candidate;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn get_candidate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    let matches = state.store.find_by_name(&name).await?;

    if matches.is_empty() {
        tracing::info!(name = %name, "Candidate lookup found no records");
        return Err(AppError::NotFound(anyhow::anyhow!(
            "ERROR: {} NOT FOUND",
            name
        )));
    }

    Ok(Json(
        matches.into_iter().map(CandidateRecord::from).collect(),
    ))
}

pub async fn upsert_candidate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<UpsertCandidateResponse>, AppError> {
    let candidate = Candidate::new(name);

    state.store.upsert(&candidate).await?;
    tracing::info!(name = %candidate.name, "Candidate upserted");

    Ok(Json(UpsertCandidateResponse {
        name: candidate.name,
    }))
}

pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let names = state.store.list_names().await?;
    Ok(Json(names))
}
