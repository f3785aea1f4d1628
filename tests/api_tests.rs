// HTTP surface tests for Volunteer Match

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use volunteer_match::config::MatchingSettings;
use volunteer_match::core::Matcher;
use volunteer_match::error::{handle_json_payload_error, handle_query_payload_error};
use volunteer_match::routes::{self, matches::AppState};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(
                    Matcher::with_default_weights(),
                    MatchingSettings::default(),
                )))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn opportunity(id: &str, skills: &[&str], schedule: &[&str], lat: f64, lon: f64, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Opportunity {}", id),
        "requiredSkills": skills,
        "schedule": schedule,
        "latitude": lat,
        "longitude": lon,
        "status": status,
    })
}

const ID_A: &str = "00000000-0000-4000-8000-00000000000a";
const ID_B: &str = "00000000-0000-4000-8000-00000000000b";
const ID_C: &str = "00000000-0000-4000-8000-00000000000c";

#[actix_web::test]
async fn test_health() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_rank_returns_breakdown() {
    let app = init_app!();

    let payload = json!({
        "volunteer": {
            "skills": ["python", "design"],
            "availability": ["monday"],
            "latitude": 0.0,
            "longitude": 0.0
        },
        "opportunities": [
            opportunity(ID_A, &["python"], &["monday", "wednesday"], 0.0, 0.0, "active")
        ]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let first = &body["matches"][0];
    assert_eq!(first["opportunity"]["id"], ID_A);
    assert_eq!(first["score"].as_f64(), Some(85.0));
    assert_eq!(first["breakdown"]["skillMatch"].as_f64(), Some(100.0));
    assert_eq!(first["breakdown"]["scheduleMatch"].as_f64(), Some(50.0));
    assert_eq!(first["breakdown"]["distance"].as_f64(), Some(0.0));
    assert_eq!(body["maxDistanceKm"].as_f64(), Some(50.0));
}

#[actix_web::test]
async fn test_rank_drops_inactive_and_applies_limit() {
    let app = init_app!();

    let payload = json!({
        "volunteer": { "skills": ["python"], "availability": [] },
        "opportunities": [
            opportunity(ID_A, &["cooking"], &[], 10.0, 10.0, "active"),
            opportunity(ID_B, &["python"], &[], 10.0, 10.0, "closed"),
            opportunity(ID_C, &["python"], &[], 10.0, 10.0, "active")
        ]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank?limit=1")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCandidates"], 3);
    assert_eq!(body["eligibleCandidates"], 2);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["opportunity"]["id"], ID_C);
}

#[actix_web::test]
async fn test_rank_honours_max_distance_query() {
    let app = init_app!();

    let payload = json!({
        "volunteer": { "latitude": 0.0, "longitude": 0.0 },
        "opportunities": [ opportunity(ID_A, &[], &[], 0.0, 1.0, "active") ]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank?maxDistance=50")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["matches"].as_array().unwrap().is_empty());

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank?maxDistance=200")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["matches"][0]["breakdown"]["distance"].as_f64(), Some(111.2));
}

#[actix_web::test]
async fn test_rank_rejects_half_location() {
    let app = init_app!();

    let payload = json!({
        "volunteer": { "latitude": 0.0 },
        "opportunities": []
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_failed");
}

#[actix_web::test]
async fn test_rank_rejects_negative_distance() {
    let app = init_app!();

    let payload = json!({ "volunteer": {}, "opportunities": [] });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank?maxDistance=-5")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_rank_rejects_malformed_json() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}
