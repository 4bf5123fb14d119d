//! Mock HTTP tests for ApiClient.
//!
//! These tests cover:
//! - Listing users
//! - Adding users (success and server-side rejection)
//! - Fetching the data summary
//! - Error display

use reviews_carousel::api::{ApiClient, ApiError, NewUser};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// === Users ===

#[tokio::test]
async fn test_list_users_parses_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "age": 36,
                "registrationDate": "2024-05-01T10:00:00Z"
            },
            {
                "name": "Alan Turing",
                "email": "alan@example.com"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let users = client.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Ada Lovelace");
    assert_eq!(users[0].age, Some(36));
    assert_eq!(
        users[0].registration_date.as_deref(),
        Some("2024-05-01T10:00:00Z")
    );
    assert_eq!(users[1].age, None);
    assert_eq!(users[1].registration_date, None);
}

#[tokio::test]
async fn test_list_users_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    assert!(client.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_users_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client.list_users().await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP error! status: 500");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_add_user_posts_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(serde_json::json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "age": 45
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "age": 45,
            "registrationDate": "2024-06-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let user = client
        .add_user(&NewUser::new("Grace Hopper", "grace@example.com", Some(45)))
        .await
        .unwrap();
    assert_eq!(user.email, "grace@example.com");
}

#[tokio::test]
async fn test_add_user_omits_missing_age() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(serde_json::json!({
            "name": "Grace",
            "email": "grace@example.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "name": "Grace",
            "email": "grace@example.com"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let user = client
        .add_user(&NewUser::new("Grace", "grace@example.com", None))
        .await
        .unwrap();
    assert_eq!(user.age, None);
}

#[tokio::test]
async fn test_add_user_surfaces_server_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(serde_json::json!({ "error": "Email already registered" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client
        .add_user(&NewUser::new("Ada", "ada@example.com", None))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "HTTP error 409: Email already registered");
}

#[tokio::test]
async fn test_add_user_falls_back_without_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(400).set_body_string("nope"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client
        .add_user(&NewUser::new("Ada", "ada@example.com", None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status { status: 400, ref message } if message == "Failed to add user"
    ));
}

#[tokio::test]
async fn test_add_invalid_user_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client
        .add_user(&NewUser::new("Ada", "  ", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidUser(_)));
}

// === Data ===

#[tokio::test]
async fn test_fetch_data_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Hello from the backend",
            "users": ["ada", "alan"],
            "status": "ok"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let data = client.fetch_data().await.unwrap();
    assert_eq!(data.message, "Hello from the backend");
    assert_eq!(data.users, vec!["ada".to_string(), "alan".to_string()]);
    assert_eq!(data.status, "ok");
}

#[tokio::test]
async fn test_fetch_data_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client.fetch_data().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
}

// === Error Display ===

#[test]
fn test_api_error_display() {
    assert_eq!(
        ApiError::InvalidUser("name is required".to_string()).to_string(),
        "Invalid user: name is required"
    );
    assert_eq!(
        ApiError::Status {
            status: 404,
            message: "missing".to_string()
        }
        .to_string(),
        "HTTP error 404: missing"
    );
}
