//! HTTP route handlers.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::{DestinationId, RegionPreference};

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes", post(plan_routes))
        .route("/api/destinations", get(list_destinations))
        .route("/api/destinations/:id", get(get_destination))
        .route("/api/regions", get(list_regions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse an optional region parameter, defaulting to any region.
fn parse_region(raw: Option<&str>) -> Result<RegionPreference, AppError> {
    Ok(raw.map(RegionPreference::from_str).transpose()?.unwrap_or_default())
}

/// Plan route options for a traveler.
async fn plan_routes(
    State(state): State<AppState>,
    Json(req): Json<PlanRoutesRequest>,
) -> Result<Json<PlanRoutesResponse>, AppError> {
    let region = parse_region(req.region.as_deref())?;
    let query = req.to_query(region)?;

    let response = state.planner.plan(&query).await?;
    info!(
        passports = ?query.passports(),
        budget_usd = query.total_budget_usd(),
        duration_days = query.duration_days(),
        %region,
        options = response.options.len(),
        eliminations = response.eliminations.len(),
        "routes planned"
    );

    Ok(Json(PlanRoutesResponse::new(query, &response, Utc::now())))
}

/// List active destinations, optionally in one region.
async fn list_destinations(
    State(state): State<AppState>,
    Query(req): Query<DestinationsRequest>,
) -> Result<Json<DestinationsResponse>, AppError> {
    let region = parse_region(req.region.as_deref())?;

    let destinations = state
        .store()
        .catalog()
        .destinations
        .iter()
        .filter(|d| d.is_active && region.matches(&d.region))
        .map(DestinationResult::from)
        .collect();

    Ok(Json(DestinationsResponse {
        region,
        destinations,
    }))
}

/// Look up one destination by id.
async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<DestinationResult>, AppError> {
    let id = DestinationId(id);
    state
        .store()
        .catalog()
        .destinations
        .iter()
        .find(|d| d.id == id)
        .map(|d| Json(DestinationResult::from(d)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("no destination with id {id}"),
        })
}

/// List region preferences.
async fn list_regions() -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: RegionPreference::ALL
            .into_iter()
            .map(RegionResult::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::cache::CacheConfig;
    use crate::planner::RouteEngine;
    use crate::reference::InMemoryStore;

    fn app() -> Router {
        create_router(AppState::new(
            InMemoryStore::seeded(),
            RouteEngine::default(),
            &CacheConfig::default(),
        ))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_routes(body: Value) -> (StatusCode, Value) {
        send(
            Request::post("/api/routes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn health_check() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn plan_routes_for_turkish_passport() {
        let (status, body) = post_routes(json!({
            "passports": ["tr"],
            "budget_usd": 2000,
            "duration_days": 10,
            "region": "balkans"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"]["passports"], json!(["TR"]));
        assert_eq!(body["query"]["region"], "balkans");
        assert!(body["generated_at"].is_string());

        let options = body["options"].as_array().unwrap();
        assert_eq!(options[0]["kind"], "focus");
        assert_eq!(options[0]["name"], "Belgrade Focus");
        assert_eq!(options[1]["kind"], "multi_city_loop");
        assert!(body["eliminations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn plan_routes_reports_eliminations() {
        let (status, body) = post_routes(json!({
            "passports": ["TR"],
            "budget_usd": 2000,
            "duration_days": 10,
            "region": "Western Europe"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["options"].as_array().unwrap().is_empty());
        let eliminations = body["eliminations"].as_array().unwrap();
        assert_eq!(eliminations.len(), 3);
        assert!(eliminations.iter().all(|e| e["reason"] == "VisaRequired"));
    }

    #[tokio::test]
    async fn held_visa_flags_are_honored() {
        let (status, body) = post_routes(json!({
            "passports": ["TR"],
            "budget_usd": 2000,
            "duration_days": 5,
            "region": "western-europe",
            "has_schengen_visa": true
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"]["held_visas"]["schengen"], true);
        assert_eq!(
            body["options"][0]["stops"][0]["visa_status"],
            "Covered by held visa (eVisa-equivalent)"
        );
    }

    #[tokio::test]
    async fn invalid_queries_are_rejected() {
        let cases = [
            json!({"passports": ["TR"], "budget_usd": 0, "duration_days": 10}),
            json!({"passports": ["TR"], "budget_usd": 2000, "duration_days": -1}),
            json!({"passports": ["T1"], "budget_usd": 2000, "duration_days": 10}),
            json!({"passports": ["TR"], "budget_usd": 2000, "duration_days": 10, "region": "atlantis"}),
        ];

        for case in cases {
            let (status, body) = post_routes(case.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
            assert!(body["error"].is_string(), "{case}");
        }
    }

    #[tokio::test]
    async fn list_destinations_by_region() {
        let (status, body) = get_json("/api/destinations?region=balkans").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["region"], "balkans");
        let destinations = body["destinations"].as_array().unwrap();
        assert_eq!(destinations.len(), 6);
        assert!(destinations.iter().all(|d| d["region"] == "Balkans"));
        assert!(destinations.iter().all(|d| d["city"] != "Mostar"));
    }

    #[tokio::test]
    async fn list_all_destinations() {
        let (status, body) = get_json("/api/destinations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["region"], "any");
        assert!(body["destinations"].as_array().unwrap().len() > 6);
    }

    #[tokio::test]
    async fn unknown_region_is_rejected() {
        let (status, body) = get_json("/api/destinations?region=atlantis").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown region preference: \"atlantis\"");
    }

    #[tokio::test]
    async fn get_destination_by_id() {
        let (status, body) = get_json("/api/destinations/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city"], "Belgrade");

        let (status, body) = get_json("/api/destinations/9999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no destination with id #9999");
    }

    #[tokio::test]
    async fn list_regions() {
        let (status, body) = get_json("/api/regions").await;

        assert_eq!(status, StatusCode::OK);
        let regions = body["regions"].as_array().unwrap();
        assert_eq!(regions.len(), 13);
        assert_eq!(regions[0]["id"], "any");
        assert_eq!(regions[1]["label"], "Balkans");
    }
}
