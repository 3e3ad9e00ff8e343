mod common;

use auth::FixedClock;
use auth::TokenCodec;
use auth::TokenError;
use chrono::Duration;
use chrono::Utc;
use chirpy_service::config::Platform;
use common::TestApp;
use common::TEST_JWT_SECRET;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;
use uuid::Uuid;

const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing bearer token";

#[tokio::test]
async fn test_healthz_returns_ok() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/healthz").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "email": "walt@breakingbad.com",
            "password": "heisenberg123"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["email"], "walt@breakingbad.com");
    assert!(Uuid::parse_str(body["data"]["id"].as_str().unwrap()).is_ok());
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("hashed_password").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email_conflicts() {
    let app = TestApp::spawn().await;
    app.create_user("jesse@breakingbad.com", "yo").await;

    let response = app
        .post("/api/users")
        .json(&json!({ "email": "jesse@breakingbad.com", "password": "other" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({ "email": "not-an-email", "password": "secret" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_returns_token_for_user() {
    let app = TestApp::spawn().await;
    let user = app.create_user("skyler@breakingbad.com", "carwash").await;

    let response = app
        .post("/api/login")
        .json(&json!({ "email": "skyler@breakingbad.com", "password": "carwash" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["user"]["id"], user["id"]);
    assert_eq!(body["data"]["user"]["email"], "skyler@breakingbad.com");

    let token = body["data"]["token"].as_str().unwrap();
    let subject = TokenCodec::new()
        .validate(token, TEST_JWT_SECRET.as_bytes())
        .unwrap();
    assert_eq!(subject.to_string(), user["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let app = TestApp::spawn().await;
    app.create_user("hank@breakingbad.com", "minerals").await;

    let wrong_password = app
        .post("/api/login")
        .json(&json!({ "email": "hank@breakingbad.com", "password": "rocks" }))
        .send()
        .await
        .unwrap();
    let unknown_email = app
        .post("/api/login")
        .json(&json!({ "email": "marie@breakingbad.com", "password": "minerals" }))
        .send()
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_email: Value = unknown_email.json().await.unwrap();
    assert_eq!(
        wrong_password["data"]["message"],
        "Incorrect email or password"
    );
    assert_eq!(wrong_password["data"], unknown_email["data"]);
}

#[tokio::test]
async fn test_login_honours_requested_expiry() {
    let app = TestApp::spawn().await;
    app.create_user("saul@breakingbad.com", "bettercall").await;

    let response = app
        .post("/api/login")
        .json(&json!({
            "email": "saul@breakingbad.com",
            "password": "bettercall",
            "expires_in_seconds": 60
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap();

    let later = TokenCodec::with_clock(FixedClock(Utc::now() + Duration::seconds(120)));
    assert_eq!(
        later.validate(token, TEST_JWT_SECRET.as_bytes()),
        Err(TokenError::Expired)
    );
}

#[tokio::test]
async fn test_create_chirp_with_token_is_moderated() {
    let app = TestApp::spawn().await;
    let user = app.create_user("gus@breakingbad.com", "pollos").await;
    let token = app.login("gus@breakingbad.com", "pollos").await;

    let response = app
        .post_authenticated("/api/chirps", &token)
        .json(&json!({ "body": "This is a Kerfuffle opinion I need to share" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["body"], "This is a **** opinion I need to share");
    assert_eq!(body["data"]["user_id"], user["id"]);
}

#[tokio::test]
async fn test_create_chirp_without_header_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/chirps")
        .json(&json!({ "body": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], UNAUTHORIZED_MESSAGE);
}

#[tokio::test]
async fn test_create_chirp_with_basic_scheme_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/chirps")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .json(&json!({ "body": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], UNAUTHORIZED_MESSAGE);
}

#[tokio::test]
async fn test_create_chirp_with_foreign_secret_is_unauthorized() {
    let app = TestApp::spawn().await;
    let user = app.create_user("mike@breakingbad.com", "halfmeasures").await;
    let user_id = Uuid::parse_str(user["id"].as_str().unwrap()).unwrap();

    let token = TokenCodec::new()
        .issue(user_id, b"some-other-secret", Duration::hours(1))
        .unwrap();

    let response = app
        .post_authenticated("/api/chirps", &token)
        .json(&json!({ "body": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], UNAUTHORIZED_MESSAGE);
}

#[tokio::test]
async fn test_create_chirp_with_expired_token_is_unauthorized() {
    let app = TestApp::spawn().await;
    let user = app.create_user("todd@breakingbad.com", "tarantula").await;
    let user_id = Uuid::parse_str(user["id"].as_str().unwrap()).unwrap();

    let yesterday = TokenCodec::with_clock(FixedClock(Utc::now() - Duration::days(1)));
    let token = yesterday
        .issue(user_id, TEST_JWT_SECRET.as_bytes(), Duration::hours(1))
        .unwrap();

    let response = app
        .post_authenticated("/api/chirps", &token)
        .json(&json!({ "body": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], UNAUTHORIZED_MESSAGE);
}

#[tokio::test]
async fn test_create_chirp_too_long() {
    let app = TestApp::spawn().await;
    app.create_user("lydia@breakingbad.com", "stevia").await;
    let token = app.login("lydia@breakingbad.com", "stevia").await;

    let response = app
        .post_authenticated("/api/chirps", &token)
        .json(&json!({ "body": "a".repeat(141) }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Chirp is too long"));
}

#[tokio::test]
async fn test_list_and_get_chirps() {
    let app = TestApp::spawn().await;
    app.create_user("badger@breakingbad.com", "startrek").await;
    let token = app.login("badger@breakingbad.com", "startrek").await;

    for text in ["first", "second"] {
        let response = app
            .post_authenticated("/api/chirps", &token)
            .json(&json!({ "body": text }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.get("/api/chirps").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let chirps = body["data"].as_array().unwrap();
    assert_eq!(chirps.len(), 2);
    assert_eq!(chirps[0]["body"], "first");
    assert_eq!(chirps[1]["body"], "second");

    let chirp_id = chirps[1]["id"].as_str().unwrap();
    let response = app
        .get(&format!("/api/chirps/{}", chirp_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["id"], chirp_id);
    assert_eq!(body["data"]["body"], "second");
}

#[tokio::test]
async fn test_get_chirp_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get(&format!("/api/chirps/{}", Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.get("/api/chirps/not-a-uuid").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reset_in_dev_removes_users_and_their_chirps() {
    let app = TestApp::spawn().await;
    app.create_user("walt@breakingbad.com", "heisenberg123").await;
    let token = app.login("walt@breakingbad.com", "heisenberg123").await;

    let response = app
        .post_authenticated("/api/chirps", &token)
        .json(&json!({ "body": "Say my name" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.post("/admin/reset").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["removed_users"], 1);

    let response = app.get("/api/chirps").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // The email is free again
    app.create_user("walt@breakingbad.com", "heisenberg123").await;
}

#[tokio::test]
async fn test_create_chirp_for_deleted_user_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.create_user("gale@breakingbad.com", "lab").await;
    let token = app.login("gale@breakingbad.com", "lab").await;

    let response = app.post("/admin/reset").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post_authenticated("/api/chirps", &token)
        .json(&json!({ "body": "still here?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.get("/api/chirps").send().await.unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_reset_outside_dev_is_forbidden() {
    let app = TestApp::spawn_on(Platform::Prod).await;

    let response = app.post("/admin/reset").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
