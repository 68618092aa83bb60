use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use innkeep_core::{CreateRoom, CreateRoomType, Room, RoomPatch, RoomType};
use innkeep_store::RoomQuery;

use crate::{error::ApiError, server::AppState};

#[derive(Serialize)]
pub struct HealthResponse<'a> {
    status: &'a str,
}

pub async fn root() -> impl IntoResponse {
    let body = json!({
        "service": "Innkeep Server",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

pub async fn readyz() -> impl IntoResponse {
    // Stores are in-memory, so readiness follows liveness.
    (StatusCode::OK, Json(HealthResponse { status: "ready" }))
}

// ---- Room types ----

pub async fn create_room_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomType>,
) -> (StatusCode, Json<RoomType>) {
    let room_type = state.room_types.create(payload).await;
    (StatusCode::CREATED, Json(room_type))
}

pub async fn list_room_types(State(state): State<AppState>) -> Json<Vec<RoomType>> {
    Json(state.room_types.list_all().await)
}

// ---- Rooms ----

/// List parameters as they appear on the wire. Price bounds stay strings here;
/// lenient numeric parsing happens in the query layer.
#[derive(Debug, Default, Deserialize)]
pub struct RoomListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(rename = "roomType", default)]
    pub room_type: Option<String>,
    #[serde(rename = "minPrice", default)]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<String>,
}

pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoom>,
) -> (StatusCode, Json<Room>) {
    let room = state.rooms.create(payload).await;
    (StatusCode::CREATED, Json(room))
}

pub async fn list_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomListParams>,
) -> Json<Vec<Room>> {
    let query = RoomQuery::from_params(
        params.search,
        params.room_type,
        params.min_price,
        params.max_price,
    );
    Json(state.rooms.list(&query).await)
}

pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Room>, ApiError> {
    let room = state.rooms.get(&room_id).await?;
    Ok(Json(room))
}

pub async fn patch_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(patch): Json<RoomPatch>,
) -> Result<Json<Room>, ApiError> {
    let room = state.rooms.update(&room_id, patch).await?;
    Ok(Json(room))
}

pub async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.rooms.delete(&room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
