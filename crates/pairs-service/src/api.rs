//! HTTP API serving token pairs for the active network.

use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Json, Response},
	routing::get,
	Router,
};
use pairs_core::PairsEngine;
use pairs_types::{
	ErrorResponse, HealthResponse, PairsError, PairsQuery, PairsResponse, TokensResponse,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
	pub engine: Arc<PairsEngine>,
}

/// Routes with tracing and permissive CORS applied.
pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health_check))
		.route("/api/tokens", get(get_tokens))
		.route("/api/pairs", get(get_pairs))
		.with_state(state)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
}

/// Serves the API until `shutdown` resolves.
pub async fn serve<F>(host: &str, port: u16, state: AppState, shutdown: F) -> anyhow::Result<()>
where
	F: std::future::Future<Output = ()> + Send + 'static,
{
	let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

	info!("API server listening on {}:{}", host, port);

	axum::serve(listener, router(state))
		.with_graceful_shutdown(shutdown)
		.await?;

	Ok(())
}

/// Maps resolution failures onto HTTP status codes.
pub struct ApiError(PairsError);

impl From<PairsError> for ApiError {
	fn from(err: PairsError) -> Self {
		Self(err)
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let (status, code) = match &self.0 {
			PairsError::UnknownToken(_) => (StatusCode::NOT_FOUND, "UNKNOWN_TOKEN"),
			PairsError::InvalidAddress { .. } => (StatusCode::BAD_REQUEST, "INVALID_ADDRESS"),
			_ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
		};
		warn!("Request failed: {}", self.0);

		let body = ErrorResponse {
			error: code.to_string(),
			message: self.0.to_string(),
		};
		(status, Json(body)).into_response()
	}
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok".to_string(),
		network: state.engine.network(),
		timestamp: chrono::Utc::now().timestamp(),
	})
}

async fn get_tokens(State(state): State<AppState>) -> Json<TokensResponse> {
	Json(state.engine.tokens())
}

async fn get_pairs(
	State(state): State<AppState>,
	Query(query): Query<PairsQuery>,
) -> Result<Json<PairsResponse>, ApiError> {
	let combinations = state.engine.combinations(&query.from, &query.to)?;
	Ok(Json(combinations.into()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::{to_bytes, Body};
	use axum::http::Request;
	use pairs_config::PairsConfig;
	use tower::ServiceExt;

	fn app() -> Router {
		let engine = PairsEngine::from_config(&PairsConfig::default()).unwrap();
		router(AppState {
			engine: Arc::new(engine),
		})
	}

	async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
		let response = app()
			.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
			.await
			.unwrap();
		let status = response.status();
		let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		(status, serde_json::from_slice(&bytes).unwrap())
	}

	#[tokio::test]
	async fn test_health() {
		let (status, body) = get("/health").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["status"], "ok");
		assert_eq!(body["network"], "mainnet");
	}

	#[tokio::test]
	async fn test_pairs() {
		let (status, body) = get("/api/pairs?from=ETH&to=USDC").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["count"], 10);
		assert_eq!(body["from"]["symbol"], "WETH");
		// USDC sorts below WETH by address
		assert_eq!(body["pairs"][0]["token0"]["symbol"], "USDC");
		assert_eq!(body["pairs"][0]["token1"]["symbol"], "WETH");
		assert_eq!(
			body["pairs"][0]["poolAddress"],
			"0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc"
		);
	}

	#[tokio::test]
	async fn test_unknown_token() {
		let (status, body) = get("/api/pairs?from=SHIB&to=USDC").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["error"], "UNKNOWN_TOKEN");
	}

	#[tokio::test]
	async fn test_invalid_address() {
		let (status, body) = get("/api/pairs?from=0xzz&to=USDC").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["error"], "INVALID_ADDRESS");
	}

	#[tokio::test]
	async fn test_tokens() {
		let (status, body) = get("/api/tokens").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["chainId"], 1);
		assert_eq!(body["baseTokens"].as_array().unwrap().len(), 5);
	}
}
