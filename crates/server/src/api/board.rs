use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use metroboard::display;

use crate::{
    dto::{ApiError, BoardDto, LineMapDto, StationDetailDto},
    state::AppState,
};

pub async fn board(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let snapshot = state.display.read().await.clone();
    let view = display::board_view(&state.repository, &snapshot).map_err(ApiError::not_found)?;
    Ok(Json(BoardDto::from(&view)).into_response())
}

pub async fn line_map(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let snapshot = state.display.read().await.clone();
    let view = display::line_map_view(
        &state.repository,
        &snapshot.line,
        &snapshot.service,
        snapshot.direction,
    )
    .map_err(ApiError::not_found)?;
    Ok(Json(LineMapDto::from(&view)).into_response())
}

pub async fn station_detail(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let snapshot = state.display.read().await.clone();
    let view =
        display::station_detail(&state.repository, &snapshot).map_err(ApiError::not_found)?;
    Ok(Json(StationDetailDto::from(&view)).into_response())
}
