use std::net::TcpListener;
use std::rc::Rc;
use std::time::{Duration, Instant};

use actix_web::{App, http::StatusCode, test, web};
use citizen_registry::domain::profile::PASSWORD_MASK;
use citizen_registry::{build_repository, configure};
use serde_json::{Value, json};
use tera::Tera;

mod common;

macro_rules! init_app {
    ($env:expr) => {{
        let (store, repo) = build_repository(&$env.config);
        let tera = Tera::new(&$env.config.templates_dir).expect("templates should parse");
        test::init_service(
            App::new()
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(repo))
                .app_data(web::Data::from(store))
                .configure(configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn missing_config_file_returns_defaults() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::get().uri("/api/db-config").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["host"], "localhost");
    assert_eq!(body["port"], 5432);
    assert_eq!(body["password"], PASSWORD_MASK);
}

#[actix_web::test]
async fn updated_config_is_returned_redacted() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/db-config")
        .set_json(json!({
            "host": "db.example",
            "port": "6543",
            "database": "cad",
            "user": "ops",
            "password": "x"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::get().uri("/api/db-config").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["host"], "db.example");
    assert_eq!(body["port"], 6543);
    assert_eq!(body["database"], "cad");
    assert_eq!(body["user"], "ops");
    assert_eq!(body["password"], PASSWORD_MASK);
}

#[actix_web::test]
async fn empty_password_stays_empty() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/db-config")
        .set_json(json!({"host": "db.example"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/db-config").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["password"], "");
    assert_eq!(body["port"], 5432);
}

#[actix_web::test]
async fn invalid_port_is_not_saved() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/db-config")
        .set_json(json!({"host": "db.example", "port": "abc"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    assert!(!std::path::Path::new(&env.config.db_config_path).exists());
}

#[actix_web::test]
async fn connection_test_against_closed_port_fails_with_description() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/test-connection")
        .set_json(json!({
            "host": "127.0.0.1",
            "port": 1,
            "database": "cad",
            "user": "ops",
            "password": "x"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    // Probing never persists the candidate.
    assert!(!std::path::Path::new(&env.config.db_config_path).exists());
}

#[actix_web::test]
async fn connection_test_with_out_of_range_port_is_configuration_error() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/test-connection")
        .set_json(json!({"host": "127.0.0.1", "port": "70000"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Invalid configuration")
    );
}

#[actix_web::test]
async fn citizens_listing_failure_is_empty_with_error() {
    let env = common::TestEnv::new();
    env.point_at_closed_port();
    let app = init_app!(env);

    let req = test::TestRequest::get()
        .uri("/api/citizens?search=doe&status=arrested")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["citizens"], json!([]));
    assert_eq!(body["count"], 0);
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
}

#[actix_web::test]
async fn toggle_failure_reports_error() {
    let env = common::TestEnv::new();
    env.point_at_closed_port();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/update")
        .set_form([("citizen_id", "ck1"), ("arrested", "on")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body.get("verified").is_none());
}

#[actix_web::test]
async fn toggle_with_blank_id_is_rejected() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/update")
        .set_form([("citizen_id", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn index_page_renders() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("At most 200 citizens"));
}

#[actix_web::test]
async fn stalled_connection_test_does_not_hold_other_requests() {
    let env = common::TestEnv::new();
    let app = Rc::new(init_app!(env));
    // Accepts connections through the backlog but never answers the handshake.
    let silent = TcpListener::bind("127.0.0.1:0").expect("should bind");
    let port = silent.local_addr().expect("local addr").port();

    let started = Instant::now();
    let slow = actix_web::rt::spawn({
        let app = Rc::clone(&app);
        async move {
            let req = test::TestRequest::post()
                .uri("/api/test-connection")
                .set_json(json!({"host": "127.0.0.1", "port": port, "database": "cad"}))
                .to_request();
            let resp = test::call_service(&*app, req).await;
            let status = resp.status();
            let body: Value = test::read_body_json(resp).await;
            (status, body)
        }
    });
    actix_web::rt::time::sleep(Duration::from_millis(100)).await;

    let req = test::TestRequest::get().uri("/api/db-config").to_request();
    let resp = test::call_service(&*app, req).await;
    let elapsed = started.elapsed();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        elapsed < Duration::from_secs(1),
        "config read waited {elapsed:?} behind the connection test"
    );

    let (status, body) = slow.await.expect("connection test task");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    drop(silent);
}

#[actix_web::test]
async fn toggle_without_citizen_id_returns_json_envelope() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/update")
        .set_form([("arrested", "on")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .contains("citizen_id")
    );
}

#[actix_web::test]
async fn config_update_with_boolean_port_returns_json_envelope() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/db-config")
        .set_json(json!({"host": "db.example", "port": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    assert!(!std::path::Path::new(&env.config.db_config_path).exists());
}

#[actix_web::test]
async fn connection_test_with_malformed_json_returns_json_envelope() {
    let env = common::TestEnv::new();
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/test-connection")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
