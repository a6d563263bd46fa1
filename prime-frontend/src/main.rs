mod upstream;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use prime_services_utils::{bind_addr_from_env, init_tracing, serve_http, var_or};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower_http::trace::TraceLayer;
use upstream::CheckerClient;

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

// Checker hostname on the internal (docker-compose) network.
const DEFAULT_CHECKER_URL: &str = "http://prime-api:5000";

async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

// Relays the checker's body unchanged; upstream faults are not translated.
async fn api_check(
    State(checker): State<CheckerClient>,
    Path(number): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match checker.check(number).await {
        Ok(body) => Ok(Json(body)),
        Err(err) => {
            tracing::error!("upstream check failed: {err:#}");

            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

fn router(checker: CheckerClient) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/check/{number}", get(api_check))
        .layer(TraceLayer::new_for_http())
        .with_state(checker)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let addr = bind_addr_from_env("PRIME_FRONTEND_ADDR", DEFAULT_ADDR)?;
    let checker = CheckerClient::new(var_or("PRIME_CHECKER_URL", DEFAULT_CHECKER_URL));

    serve_http(addr, router(checker)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    // Stand-in for the checker service on an ephemeral local port.
    async fn spawn_checker_stub() -> String {
        let stub = Router::new().route(
            "/check/{number}",
            get(|Path(number): Path<u64>| async move {
                Json(serde_json::json!({ "number": number, "is_prime": number == 7 }))
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });

        format!("http://{addr}")
    }

    async fn get_response(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, body.to_vec())
    }

    #[tokio::test]
    async fn index_serves_the_static_page() {
        let router = router(CheckerClient::new("http://unused"));

        let (status, body) = get_response(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("Prime Checker"));
    }

    #[tokio::test]
    async fn relay_returns_the_upstream_body_unchanged() {
        let base_url = spawn_checker_stub().await;

        let direct: serde_json::Value = reqwest::get(format!("{base_url}/check/7"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let router = router(CheckerClient::new(base_url));
        let (status, body) = get_response(router, "/api/check/7").await;
        let relayed: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(relayed, direct);
        assert_eq!(
            relayed,
            serde_json::json!({ "number": 7, "is_prime": true })
        );
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_bad_gateway() {
        // Bind and drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let router = router(CheckerClient::new(format!("http://{addr}")));

        let (status, _) = get_response(router, "/api/check/7").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn malformed_numbers_never_reach_the_relay() {
        let router = router(CheckerClient::new("http://unused"));

        let (status, _) = get_response(router, "/api/check/seven").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
