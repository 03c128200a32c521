//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{Line, LineId, SectionError, StationId};
use crate::lines::{AddSection, CreateLine, LineError};
use crate::stations::StationError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route(
            "/lines/:id",
            get(get_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).get(list_sections).delete(remove_station),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Register a station.
async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<StationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let station = state.stations.create(&req.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(StationResponse::from_station(&station)),
    ))
}

/// List all stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.stations.list().await;
    Json(stations.iter().map(StationResponse::from_station).collect())
}

/// Remove a station from the registry.
async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.stations.remove(StationId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line with its first section.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<LineRequest>,
) -> Result<impl IntoResponse, AppError> {
    let line = state
        .lines
        .create_line(CreateLine {
            name: req.name,
            color: req.color,
            up_station: StationId(req.up_station_id),
            down_station: StationId(req.down_station_id),
            distance: req.distance,
        })
        .await?;

    Ok((StatusCode::CREATED, line_json(&line)?))
}

/// List all lines with their ordered stations.
async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, AppError> {
    let lines = state.lines.list_lines().await;

    let mut responses = Vec::with_capacity(lines.len());
    for line in &lines {
        responses.push(LineResponse::from_line(line)?);
    }
    Ok(Json(responses))
}

/// Fetch one line with its ordered stations.
async fn get_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state.lines.get_line(LineId(id)).await?;
    line_json(&line)
}

/// Update a line's name and color.
async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state
        .lines
        .update_line(LineId(id), req.name, req.color)
        .await?;
    line_json(&line)
}

/// Delete a line.
async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.lines.delete_line(LineId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Insert a section into a line.
async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<SectionRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state
        .lines
        .add_section(
            LineId(id),
            AddSection {
                up_station: StationId(req.up_station_id),
                down_station: StationId(req.down_station_id),
                distance: req.distance,
            },
        )
        .await?;
    line_json(&line)
}

/// List a line's sections (storage order).
async fn list_sections(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<SectionResponse>>, AppError> {
    let line = state.lines.get_line(LineId(id)).await?;
    Ok(Json(
        line.sections()
            .iter()
            .map(SectionResponse::from_section)
            .collect(),
    ))
}

/// Remove a station from a line, merging its sections.
async fn remove_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<RemoveStationQuery>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state
        .lines
        .remove_station(LineId(id), StationId(query.station_id))
        .await?;
    line_json(&line)
}

fn line_json(line: &Line) -> Result<Json<LineResponse>, AppError> {
    Ok(Json(LineResponse::from_line(line)?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SectionError> for AppError {
    fn from(e: SectionError) -> Self {
        match e {
            SectionError::StationNotOnLine(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SectionError::BrokenPath => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        match e {
            StationError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<LineError> for AppError {
    fn from(e: LineError) -> Self {
        match e {
            LineError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            LineError::Station(inner) => inner.into(),
            LineError::Section(inner) => inner.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
