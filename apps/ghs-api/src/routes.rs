use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use ghs_search::{SearchRequest, SearchResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/search", get(search))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

#[derive(Debug, Deserialize)]
struct SearchParams {
	query: Option<String>,
	state: Option<String>,
	labels: Option<String>,
}

async fn search(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
	let Some(query) = params.query else {
		return Err(ApiError::new(
			StatusCode::BAD_REQUEST,
			"INVALID_INPUT",
			"Missing query parameter.",
		));
	};
	let request = SearchRequest { query, state: params.state, labels: params.labels };
	let response = state.service.search(request).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<ghs_search::Error> for ApiError {
	fn from(err: ghs_search::Error) -> Self {
		match &err {
			ghs_search::Error::InvalidInput { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", err.to_string()),
			ghs_search::Error::Embedding { .. } =>
				Self::new(StatusCode::BAD_GATEWAY, "EMBEDDING_FAILED", err.to_string()),
			ghs_search::Error::Store { .. } =>
				Self::new(StatusCode::BAD_GATEWAY, "STORE_FAILED", err.to_string()),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
