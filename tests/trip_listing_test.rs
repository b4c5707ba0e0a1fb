use axum_test::TestServer;
use http::StatusCode;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_empty_catalogue_returns_empty_list() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app.router).unwrap();

    let response = server.get("/api/trips").await;

    response.assert_status(StatusCode::OK);
    let trips: Value = response.json();
    assert_eq!(trips, Value::Array(vec![]));
}

#[tokio::test]
async fn test_trips_grouped_with_countries() {
    let app = common::setup_test_app().await.unwrap();
    common::insert_trip(&app.db, 1, "Balkans", 10).await;
    common::insert_trip(&app.db, 2, "Staycation", 4).await;
    common::insert_trip(&app.db, 3, "Iberia", 6).await;
    common::insert_country(&app.db, 1, "Croatia").await;
    common::insert_country(&app.db, 2, "Serbia").await;
    common::insert_country(&app.db, 3, "Montenegro").await;
    common::insert_country(&app.db, 4, "Spain").await;
    common::link_country(&app.db, 1, 1).await;
    common::link_country(&app.db, 2, 1).await;
    common::link_country(&app.db, 3, 1).await;
    common::link_country(&app.db, 4, 3).await;
    let server = TestServer::new(app.router).unwrap();

    let response = server.get("/api/trips").await;

    response.assert_status(StatusCode::OK);
    let trips: Vec<Value> = response.json();
    assert_eq!(trips.len(), 3);

    let ids: Vec<i64> = trips.iter().map(|t| t["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let balkans: Vec<&str> = trips[0]["countries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(balkans, vec!["Croatia", "Serbia", "Montenegro"]);

    assert_eq!(trips[1]["name"], "Staycation");
    assert_eq!(trips[1]["countries"], Value::Array(vec![]));

    assert_eq!(trips[2]["countries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_trip_json_shape() {
    let app = common::setup_test_app().await.unwrap();
    common::insert_trip(&app.db, 7, "Lapland", 12).await;
    let server = TestServer::new(app.router).unwrap();

    let trips: Vec<Value> = server.get("/api/trips").await.json();

    let trip = &trips[0];
    assert_eq!(trip["id"], 7);
    assert_eq!(trip["name"], "Lapland");
    assert_eq!(trip["description"], "Lapland description");
    assert_eq!(trip["dateFrom"], "2025-06-01T09:00:00");
    assert_eq!(trip["dateTo"], "2025-06-10T18:00:00");
    assert_eq!(trip["maxPeople"], 12);
    assert!(trip["countries"].is_array());
}

#[tokio::test]
async fn test_routes_follow_configured_base_path() {
    let mut config = common::create_test_app_config();
    config.server.base_path = String::new();
    let app = common::setup_test_app_with_config(config).await.unwrap();
    let server = TestServer::new(app.router).unwrap();

    server.get("/trips").await.assert_status(StatusCode::OK);
    server
        .get("/api/trips")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_database_failure_hides_details() {
    let app = common::setup_test_app().await.unwrap();
    app.db.close().await;
    let server = TestServer::new(app.router).unwrap();

    let response = server.get("/api/trips").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "An error occurred while fetching trip data.");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::setup_test_app().await.unwrap();
    let db = app.db.clone();
    let server = TestServer::new(app.router).unwrap();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");

    db.close().await;
    server
        .get("/health")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
