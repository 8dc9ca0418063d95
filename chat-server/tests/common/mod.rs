use std::str::FromStr;
use std::sync::Arc;

use auth::TokenService;
use chat_server::domain::message::service::MessageService;
use chat_server::domain::user::service::UserService;
use chat_server::inbound::http::router::create_router;
use chat_server::outbound::db;
use chat_server::outbound::repositories::SqliteMessageRepository;
use chat_server::outbound::repositories::SqliteUserRepository;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;

/// Signing secret shared between the spawned server and tests that need to
/// mint their own tokens (e.g. already-expired ones).
pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // One private in-memory database per test; a single pooled
        // connection keeps every query on the same database
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("Failed to parse database url")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to open in-memory database");
        db::init_schema(&pool)
            .await
            .expect("Failed to create schema");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = Arc::new(TokenService::new(JWT_SECRET));
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let message_repository = Arc::new(SqliteMessageRepository::new(pool));

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let message_service = Arc::new(MessageService::new(message_repository, user_repository));

        let router = create_router(user_service, message_service, token_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user and return its assigned id plus a fresh token.
    pub async fn register(&self, username: &str, password: &str) -> (i64, String) {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        (
            body["user_id"].as_i64().expect("user_id missing"),
            body["token"].as_str().expect("token missing").to_string(),
        )
    }
}
