use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use gerikit_lambda::app;
use gerikit_lambda::config::ServiceConfig;
use gerikit_lambda::state::AppState;

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(app(AppState::bundled()), "GET", uri, None).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(app(AppState::bundled()), "POST", uri, Some(body)).await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "gerikit");
}

#[tokio::test]
async fn lists_every_instrument() {
    let (status, body) = get("/instruments").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["frail", "cha2ds2_vasc", "acb", "morse", "mmse"]);
}

#[tokio::test]
async fn instrument_detail_and_unknown_id() {
    let (status, body) = get("/instruments/morse").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Morse Fall Scale");
    assert!(!body["domains"].as_array().unwrap().is_empty());

    let (status, body) = get("/instruments/gds").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("gds"));
}

#[tokio::test]
async fn scores_instrument_from_factors() {
    let (status, body) = post(
        "/instruments/frail/score",
        json!({ "factors": [1, 1, 1, 0, 0] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3.0);
    assert_eq!(body["interpretation"], "Frail");
    assert!(body["validation_errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_factor_is_reported_not_dropped() {
    let (status, body) = post(
        "/instruments/frail/score",
        json!({ "factors": [2, 0, 0, 0, 0] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2.0);
    assert_eq!(body["validation_errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn scores_instrument_from_named_entries() {
    let (status, body) = post(
        "/instruments/morse/score",
        json!({ "scores": [
            { "subscale_id": "history_of_falling", "value": 25 },
            { "subscale_id": "gait", "value": 20 }
        ] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 45.0);
    assert_eq!(body["interpretation"], "High risk");
}

#[tokio::test]
async fn rejects_bad_score_requests() {
    let (status, _) = post("/instruments/frail/score", json!({ "factors": [1, "yes"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post("/instruments/frail/score", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        "/instruments/frail/score",
        json!({ "factors": [1], "scores": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        "/instruments/morse/score",
        json!({ "scores": [{ "subscale_id": "shoe_size", "value": 1 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(
        "/instruments/frail/score",
        json!({ "scores": [
            { "subscale_id": "fatigue", "value": 1 },
            { "subscale_id": "fatigue", "value": 1 }
        ] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("more than once"));

    let (status, _) = post("/instruments/gds/score", json!({ "factors": [1] })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sums_factors() {
    let (status, body) = post("/scores/sum", json!({ "factors": [1, 2, 3.5] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6.5);

    let (_, body) = post("/scores/sum", json!({ "factors": [] })).await;
    assert_eq!(body["total"], 0.0);
}

#[tokio::test]
async fn sum_rejects_non_numeric_entries() {
    let (status, body) = post("/scores/sum", json!({ "factors": [1, "two", 3] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("position 1"));
}

#[tokio::test]
async fn categorizes_threshold_scores() {
    let (status, body) = post("/scores/morse", json!({ "score": 45 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "High risk");
    assert_eq!(body["band"], "high");

    let (_, body) = post("/scores/morse", json!({ "score": 24 })).await;
    assert_eq!(body["category"], "Low risk");

    let (_, body) = post("/scores/mmse", json!({ "score": 23 })).await;
    assert_eq!(body["category"], "Mild impairment");
    assert_eq!(body["band"], "mild_impairment");

    let (_, body) = post("/scores/mmse", json!({ "score": 24 })).await;
    assert_eq!(body["category"], "Normal");
}

#[tokio::test]
async fn beers_keeps_caller_spelling() {
    let (status, body) = post(
        "/criteria/beers",
        json!({ "medications": ["Metformin", "Valium", "aspirin"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched"], json!(["Valium", "aspirin"]));
    assert_eq!(body["findings"][0]["entry"]["drug"], "diazepam");
}

#[tokio::test]
async fn interactions_between_listed_drugs() {
    let (status, body) = post(
        "/criteria/interactions",
        json!({ "medications": ["warfarin", "aspirin"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let interactions = body["interactions"].as_array().unwrap();
    assert_eq!(interactions.len(), 1);
    assert_eq!(interactions[0]["severity"], "major");

    let (_, body) = post("/criteria/interactions", json!({ "medications": ["warfarin"] })).await;
    assert!(body["interactions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn stopp_and_start_together() {
    let (status, body) = post(
        "/criteria/stopp-start",
        json!({
            "medications": ["lorazepam"],
            "conditions": ["Falls", "Atrial fibrillation"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let stopp: Vec<&str> = body["stopp"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(stopp, ["D5", "K1"]);

    let start: Vec<&str> = body["start"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(start, ["A1"]);
}

#[tokio::test]
async fn conditions_default_to_empty() {
    let (status, body) = post(
        "/criteria/stopp-start",
        json!({ "medications": ["omeprazole"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stopp"][0]["rule_id"], "F2");
    assert!(body["start"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn anticholinergic_burden_total() {
    let (status, body) = post(
        "/criteria/acb",
        json!({ "medications": ["amitriptyline", "oxybutynin", "metformin"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6.0);
    assert_eq!(body["interpretation"], "High anticholinergic burden");
    assert_eq!(body["weights"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn analyzes_bilingual_note() {
    let (status, body) = post(
        "/notes/analyze",
        json!({ "text": "המטופל נוטל וורפרין ואספירין. BP 150/85" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["medications"], json!(["warfarin", "aspirin"]));
    assert_eq!(body["vitals"]["bp"], "150/85");

    let codes: Vec<&str> = body["advisories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"bleeding_risk"));
}

#[tokio::test]
async fn analytics_round_trip_through_shared_state() {
    let state = AppState::bundled();
    let session = uuid::Uuid::new_v4().to_string();

    for name in ["score_viewed", "score_viewed", "note_analyzed"] {
        let (status, body) = send(
            app(state.clone()),
            "POST",
            "/analytics/events",
            Some(json!({ "session_id": session, "name": name, "category": "usage" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recorded"], true);
    }

    let (status, body) = send(app(state), "GET", "/analytics/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_events"], 3);
    assert_eq!(body["distinct_sessions"], 1);
    assert_eq!(body["by_name"]["score_viewed"], 2);
    assert_eq!(body["by_category"]["usage"], 3);
}

#[tokio::test]
async fn analytics_rejects_bad_session_id() {
    let (status, body) = post(
        "/analytics/events",
        json!({ "session_id": "not-a-uuid", "name": "x" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("uuid"));
}

#[tokio::test]
async fn analytics_rejects_overlong_names() {
    let (status, body) = post(
        "/analytics/events",
        json!({ "session_id": uuid::Uuid::new_v4().to_string(), "name": "n".repeat(200) }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("longer than"));
}

#[tokio::test]
async fn disabled_analytics_drop_events() {
    let config = ServiceConfig {
        analytics_enabled: false,
        ..ServiceConfig::default()
    };
    let state = AppState::new(&config, Default::default());

    let (status, body) = send(
        app(state.clone()),
        "POST",
        "/analytics/events",
        Some(json!({ "session_id": uuid::Uuid::new_v4().to_string(), "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded"], false);

    let (_, body) = send(app(state), "GET", "/analytics/summary", None).await;
    assert_eq!(body["total_events"], 0);
}

#[tokio::test]
async fn empty_tables_find_nothing() {
    let state = AppState::new(&ServiceConfig::default(), Default::default());
    let (status, body) = send(
        app(state),
        "POST",
        "/notes/analyze",
        Some(json!({ "text": "warfarin and aspirin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["medications"].as_array().unwrap().is_empty());
}
