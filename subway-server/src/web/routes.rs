//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::{Distance, InvalidDistance, InvalidStationName, StationId, StationName};
use crate::store::{LineId, StoreError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/:id", get(get_station).delete(delete_station))
        .route("/lines", get(list_lines).post(create_line))
        .route(
            "/lines/:id",
            get(get_line).put(update_line).delete(delete_line),
        )
        .route("/lines/:id/sections", post(register_section))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, logging it on failure.
///
/// Malformed bodies are a 400 rather than axum's default 422.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(body), "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Extract a numeric path id, answering bad ids with the JSON error shape.
fn parse_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, AppError> {
    path.map(|Path(id)| id).map_err(|e| AppError::BadRequest {
        message: format!("Invalid id: {}", e.body_text()),
    })
}

/// Reject blank text fields.
fn required(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest {
            message: format!("{field} must not be blank"),
        });
    }
    Ok(trimmed.to_string())
}

fn created(location: String, body: impl serde::Serialize) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

/// Create a station.
async fn create_station(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: StationRequest = parse_json(&body)?;
    let name = StationName::new(&req.name)?;

    let stored = state.store.create_station(name).await?;
    let response = StationResponse::from_stored(&stored);

    Ok(created(format!("/stations/{}", response.id), response))
}

/// List all stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state
        .store
        .list_stations()
        .await
        .iter()
        .map(StationResponse::from_stored)
        .collect();

    Json(stations)
}

/// Show one station.
async fn get_station(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<StationResponse>, AppError> {
    let id = parse_id(path)?;
    let stored = state.store.find_station(StationId(id)).await?;
    Ok(Json(StationResponse::from_stored(&stored)))
}

/// Delete a station.
async fn delete_station(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(path)?;
    state.store.delete_station(StationId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line with its two terminals.
async fn create_line(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: LineRequest = parse_json(&body)?;
    let name = required("name", req.name)?;
    let color = required("color", req.color)?;
    let distance = Distance::new(req.distance)?;

    let stored = state
        .store
        .create_line(
            name,
            color,
            req.up_station_id,
            req.down_station_id,
            distance,
        )
        .await?;
    let response = LineResponse::from_view(&stored);

    Ok(created(format!("/lines/{}", response.id), response))
}

/// List all lines.
async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, AppError> {
    let lines = state.store.list_lines().await?;
    Ok(Json(lines.iter().map(LineResponse::from_view).collect()))
}

/// Show one line.
async fn get_line(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let id = parse_id(path)?;
    let view = state.store.get_line(LineId(id)).await?;
    Ok(Json(LineResponse::from_view(&view)))
}

/// Rename or recolor a line.
async fn update_line(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Bytes,
) -> Result<Json<LineResponse>, AppError> {
    let id = parse_id(path)?;
    let req: LineUpdateRequest = parse_json(&body)?;
    let name = required("name", req.name)?;
    let color = required("color", req.color)?;

    let view = state.store.update_line(LineId(id), name, color).await?;
    Ok(Json(LineResponse::from_view(&view)))
}

/// Delete a line.
async fn delete_line(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(path)?;
    state.store.delete_line(LineId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Register a section on a line.
async fn register_section(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Bytes,
) -> Result<Response, AppError> {
    let id = parse_id(path)?;
    let req: SectionRequest = parse_json(&body)?;
    let distance = Distance::new(req.distance)?;

    let section = state
        .store
        .register_section(LineId(id), req.up_station_id, req.down_station_id, distance)
        .await?;

    Ok((StatusCode::CREATED, Json(section)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::StationNotFound(_) | StoreError::LineNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            StoreError::DuplicateStationName(_)
            | StoreError::DuplicateLineName(_)
            | StoreError::StationInUse { .. }
            | StoreError::Section(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            StoreError::MissingStation { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<InvalidStationName> for AppError {
    fn from(e: InvalidStationName) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidDistance> for AppError {
    fn from(e: InvalidDistance) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SectionError;

    fn status_of(e: impl Into<AppError>) -> StatusCode {
        e.into().into_response().status()
    }

    #[test]
    fn store_errors_map_to_status() {
        let name = StationName::new("강남역").unwrap();

        assert_eq!(
            status_of(StoreError::StationNotFound(StationId(1))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(StoreError::LineNotFound(LineId(1))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(StoreError::DuplicateStationName(name.clone())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(StoreError::StationInUse {
                station: name,
                line: "신분당선".into(),
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(StoreError::Section(SectionError::NotInitialized)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(StoreError::MissingStation {
                line: LineId(1),
                station: StationId(2),
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        assert_eq!(
            status_of(StationName::new(" ").unwrap_err()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(Distance::new(0).unwrap_err()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn blank_fields_rejected() {
        assert!(required("name", "  ".into()).is_err());
        assert_eq!(required("name", " 2호선 ".into()).unwrap(), "2호선");
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let result: Result<StationRequest, _> = parse_json(&Bytes::from_static(b"{\"nom\": 1}"));
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn router_builds() {
        let _router = create_router(AppState::new(crate::store::SubwayStore::new()));
    }
}
