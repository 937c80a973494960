//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::events::{CampaignRecord, EventRecord};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventsResponse {
    pub campaign_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct CampaignsResponse {
    pub count: usize,
    pub campaigns: Vec<CampaignRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events`
///
/// Returns all indexed events across all campaigns.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_all_events(&state.pool).await {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(serde_json::json!(AllEventsResponse { count, events })),
            )
                .into_response()
        }
        Err(e) => internal_error(e).into_response(),
    }
}

/// `GET /campaigns`
///
/// Returns all cached campaigns with their human-readable titles.
pub async fn get_campaigns(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_campaigns(&state.pool).await {
        Ok(campaigns) => {
            let count = campaigns.len();
            (
                StatusCode::OK,
                Json(serde_json::json!(CampaignsResponse { count, campaigns })),
            )
                .into_response()
        }
        Err(e) => internal_error(e).into_response(),
    }
}

/// `GET /campaigns/:id`
///
/// Returns one cached campaign, or 404 if the indexer has not seen its
/// `created` event yet.
pub async fn get_campaign(
    State(state): State<Arc<ApiState>>,
    Path(campaign_id): Path<String>,
) -> impl IntoResponse {
    match db::get_campaign(&state.pool, &campaign_id).await {
        Ok(Some(campaign)) => (StatusCode::OK, Json(serde_json::json!(campaign))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!(ErrorResponse {
                error: format!("campaign {campaign_id} not indexed"),
            })),
        )
            .into_response(),
        Err(e) => internal_error(e).into_response(),
    }
}

/// `GET /campaigns/:id/events`
///
/// Returns all indexed events for the given campaign identifier.
pub async fn get_campaign_events(
    State(state): State<Arc<ApiState>>,
    Path(campaign_id): Path<String>,
) -> impl IntoResponse {
    match db::get_events_for_campaign(&state.pool, &campaign_id).await {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(serde_json::json!(EventsResponse {
                    campaign_id,
                    count,
                    events,
                })),
            )
                .into_response()
        }
        Err(e) => internal_error(e).into_response(),
    }
}

fn internal_error(e: crate::errors::IndexerError) -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!(ErrorResponse {
            error: e.to_string()
        })),
    )
}
