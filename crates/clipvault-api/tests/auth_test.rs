//! Registration and login integration tests.
//!
//! Run with: `cargo test -p clipvault-api --test auth_test`

mod helpers;

use helpers::setup_test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn test_register_creates_account_and_mails_credentials() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/register")
        .json(&json!({
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.com",
            "phoneNumber": "9876543210",
        }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["code"], 1);
    assert_eq!(
        body["message"],
        "User registered successfully. A mail containing login link has been sent to your id."
    );
    // The generated password travels only in the mail.
    assert!(body.get("password").is_none());
    assert!(body.get("token").is_none());

    assert_eq!(app.users.count().await, 1);

    let mails = app.mailer.sent().await;
    assert_eq!(mails.len(), 1);
    assert_eq!(mails[0].to, "asha@example.com");
    assert_eq!(mails[0].subject, "Thank you for creating account.");
    assert!(mails[0].body.contains("use this password to login : "));
    assert!(mails[0].body.contains("http://localhost:3000/login"));
}

#[tokio::test]
async fn test_register_duplicate_email_is_a_conflict() {
    let app = setup_test_app().await;
    let payload = json!({
        "firstName": "Asha",
        "lastName": "Rao",
        "email": "asha@example.com",
        "phoneNumber": "9876543210",
    });

    let first = app.client().post("/register").json(&payload).await;
    assert_eq!(first.status_code(), 201);

    let second = app.client().post("/register").json(&payload).await;
    assert_eq!(second.status_code(), 409);
    let body: Value = second.json();
    assert_eq!(body["code"], 0);
    assert_eq!(
        body["message"],
        "User already exists. Please login using credentials."
    );

    assert_eq!(app.users.count().await, 1);
    assert_eq!(app.mailer.sent().await.len(), 1);
}

#[tokio::test]
async fn test_register_reports_every_invalid_field() {
    let app = setup_test_app().await;

    let response = app.client().post("/register").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "Validation error.");

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("validation failures carry an errors array")
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"firstName"));
    assert!(fields.contains(&"lastName"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"phoneNumber"));

    assert_eq!(app.users.count().await, 0);
}

#[tokio::test]
async fn test_register_mail_failure_is_an_error_but_account_persists() {
    let app = setup_test_app().await;
    app.mailer.set_failing(true);

    let response = app
        .client()
        .post("/register")
        .json(&json!({
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.com",
            "phoneNumber": "9876543210",
        }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["code"], 0);
    assert_eq!(
        body["message"],
        "Some unexpected error occurred. Please try again."
    );

    // The row was committed before the relay was consulted.
    assert_eq!(app.users.count().await, 1);
}

#[tokio::test]
async fn test_login_unknown_email_is_not_found() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/login")
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["code"], 0);
    assert_eq!(
        body["message"],
        "User not found. Be sure that you provide correct credentials."
    );
}

#[tokio::test]
async fn test_login_wrong_password_is_rejected() {
    let app = setup_test_app().await;
    app.register_and_login("asha@example.com").await;

    let response = app
        .client()
        .post("/login")
        .json(&json!({ "email": "asha@example.com", "password": "not-the-password" }))
        .await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "Oops, that's an incorrect password.");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_returns_a_token() {
    let app = setup_test_app().await;

    app.client()
        .post("/register")
        .json(&json!({
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.com",
            "phoneNumber": "9876543210",
        }))
        .await;

    let mails = app.mailer.sent().await;
    let password = mails[0]
        .body
        .split("login : ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap();

    let response = app
        .client()
        .post("/login")
        .json(&json!({ "email": "asha@example.com", "password": password }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["code"], 1);
    assert_eq!(
        body["message"],
        "Login successful. Redirecting you to dashboard ..."
    );
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_missing_fields_fail_validation() {
    let app = setup_test_app().await;

    let response = app.client().post("/login").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("validation failures carry an errors array")
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
}

#[tokio::test]
async fn test_protected_route_requires_a_token() {
    let app = setup_test_app().await;

    let response = app.client().get("/user-metadata").await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "Unauthorized access.");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/user-metadata")
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["message"], "Unauthorized access.");
}

#[tokio::test]
async fn test_bearer_prefix_is_optional() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    let response = app
        .client()
        .get("/user-metadata")
        .add_header("Authorization", token)
        .await;

    assert_eq!(response.status_code(), 200);
}
