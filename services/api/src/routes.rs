use crate::infra::AppState;
use agrivision::accounts::{accounts_router, AccountRepository};
use agrivision::advisory::advisory_router;
use agrivision::community::{community_router, CommunityState};
use agrivision::finance::{finance_router, EligibilityEngine};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Merges every feature router and adds the operational endpoints.
pub(crate) fn with_service_routes<R>(
    engine: Arc<EligibilityEngine>,
    community: CommunityState<R>,
) -> axum::Router
where
    R: AccountRepository + 'static,
{
    let accounts = Arc::clone(&community.accounts);

    finance_router(engine)
        .merge(advisory_router())
        .merge(accounts_router(accounts))
        .merge(community_router(community))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryAccountRepository;
    use agrivision::accounts::AccountService;
    use agrivision::community::{CommunityBoard, FarmDiary};
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let accounts = Arc::new(AccountService::new(Arc::new(
            InMemoryAccountRepository::default(),
        )));
        let community = CommunityState {
            accounts,
            board: Arc::new(CommunityBoard::new()),
            diary: Arc::new(FarmDiary::default()),
        };
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };

        with_service_routes(Arc::new(EligibilityEngine::default()), community)
            .layer(Extension(state))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(true).oneshot(get("/health")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_tracks_the_flag() {
        let response = app(false).oneshot(get("/ready")).await.expect("response");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["status"], "initializing");

        let response = app(true).oneshot(get("/ready")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_use_prometheus_text_format() {
        let response = app(true).oneshot(get("/metrics")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn feature_routers_are_mounted() {
        let response = app(true)
            .oneshot(get("/api/v1/schemes/pm-kisan"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/finance/loans")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "land_acres": 2.0,
                    "crop": "Coconut",
                    "district": "Thrissur",
                    "annual_income": 200000,
                    "loan_amount_needed": 300000
                })
                .to_string(),
            ))
            .expect("request builds");
        let response = app(true).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["eligible_count"], 2);
    }

    #[tokio::test]
    async fn community_requires_a_session() {
        let response = app(true)
            .oneshot(get("/api/v1/community"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
