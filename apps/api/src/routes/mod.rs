pub mod careers;
pub mod health;
pub mod recommend;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/careers", get(careers::handle_list_careers))
        .route("/careers/:career_id", get(careers::handle_get_career))
        .route("/recommend", post(recommend::handle_recommend));

    Router::new().nest("/api", api).with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::matching::{CareerMatcher, MatchWeights};
    use crate::seed::parse_catalogue;
    use crate::store::InMemoryCareerRepository;

    const CATALOGUE: &str = include_str!("../../../../data/careers.json");

    fn app_with(careers: InMemoryCareerRepository) -> Router {
        build_router(AppState {
            careers: Arc::new(careers),
            matcher: Arc::new(CareerMatcher::new(MatchWeights::default())),
        })
    }

    fn seeded_app() -> Router {
        app_with(InMemoryCareerRepository::with_careers(
            parse_catalogue(CATALOGUE).unwrap(),
        ))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn it_student() -> Value {
        json!({
            "name": "Test Student",
            "yearLevel": 10,
            "interests": ["IT", "STEM"],
            "strengths": ["Problem-Solving", "Technical Skills"],
            "academicPerformance": "High"
        })
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = send(seeded_app(), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_list_careers_not_empty() {
        let (status, body) = send(seeded_app(), get("/api/careers")).await;
        assert_eq!(status, StatusCode::OK);
        let careers = body.as_array().unwrap();
        assert!(!careers.is_empty());
        assert!(careers[0].get("careerId").is_some());
        assert!(careers[0].get("name").is_some());
        assert!(careers[0].get("requiredSkills").is_some());
    }

    #[tokio::test]
    async fn test_get_career_by_id() {
        let (status, body) = send(seeded_app(), get("/api/careers/CR002")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["careerId"], "CR002");
    }

    #[tokio::test]
    async fn test_get_unknown_career_is_404() {
        let (status, body) = send(seeded_app(), get("/api/careers/CR999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Career not found");
    }

    #[tokio::test]
    async fn test_recommend_returns_three_recommendations() {
        let (status, body) = send(seeded_app(), post_json("/api/recommend", it_student())).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body.as_array().unwrap();
        assert_eq!(recs.len(), 3);
        for rec in recs {
            let confidence = rec["confidence"].as_f64().unwrap();
            assert!((0.0..=1.0).contains(&confidence));
            assert!(!rec["why"].as_str().unwrap().is_empty());
            assert!(rec["nextSteps"].as_str().unwrap().starts_with("Consider focusing"));
        }
        let names: Vec<&str> = recs.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["Civil Engineer", "Software Developer", "Cyber Security Analyst"]
        );
    }

    #[tokio::test]
    async fn test_recommend_on_empty_catalogue_returns_empty_list() {
        let app = app_with(InMemoryCareerRepository::default());
        let (status, body) = send(app, post_json("/api/recommend", it_student())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_recommend_rejects_year_level_zero() {
        let mut profile = it_student();
        profile["yearLevel"] = json!(0);
        let (status, body) = send(seeded_app(), post_json("/api/recommend", profile)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recommend_rejects_unknown_performance() {
        let mut profile = it_student();
        profile["academicPerformance"] = json!("Excellent");
        let (status, body) = send(seeded_app(), post_json("/api/recommend", profile)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recommend_rejects_wrong_shape() {
        let body = json!({ "name": "Test Student", "interests": "IT" });
        let (status, body) = send(seeded_app(), post_json("/api/recommend", body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = seeded_app().oneshot(get("/careers")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
