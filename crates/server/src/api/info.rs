use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use metroboard::display;

use crate::{
    dto::{ApiError, StationDto},
    state::AppState,
};

pub async fn lines(State(state): State<Arc<AppState>>) -> Response {
    let keys: Vec<String> = state
        .repository
        .line_keys()
        .iter()
        .map(|key| key.to_string())
        .collect();
    Json(keys).into_response()
}

pub async fn services(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let line = params
        .get("line")
        .ok_or_else(|| ApiError::missing_param("line"))?;
    let services =
        display::services_for_line(&state.repository, line).map_err(ApiError::not_found)?;
    let names: Vec<String> = services.iter().map(|name| name.to_string()).collect();
    Ok(Json(names).into_response())
}

pub async fn stations(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let line = params
        .get("line")
        .ok_or_else(|| ApiError::missing_param("line"))?;
    let service = params
        .get("service")
        .ok_or_else(|| ApiError::missing_param("service"))?;
    let stations =
        display::line_map(&state.repository, line, service).map_err(ApiError::not_found)?;
    let dtos: Vec<StationDto> = stations.iter().map(StationDto::from).collect();
    Ok(Json(dtos).into_response())
}
