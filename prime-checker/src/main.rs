mod primality;
mod response;

use axum::{extract::Path, routing::get, Json, Router};
use prime_services_utils::{bind_addr_from_env, init_tracing, serve_http};
use response::{CheckResponse, HealthResponse};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower_http::trace::TraceLayer;

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 5000);

async fn check(Path(number): Path<u64>) -> Json<CheckResponse> {
    let is_prime = primality::is_prime(number);

    tracing::debug!(number, is_prime, "check");

    Json(CheckResponse::new(number, is_prime))
}

// Liveness only, no checks behind it.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

fn router() -> Router {
    Router::new()
        .route("/check/{number}", get(check))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let addr = bind_addr_from_env("PRIME_CHECKER_ADDR", DEFAULT_ADDR)?;

    serve_http(addr, router()).await?;

    Ok(())
}
