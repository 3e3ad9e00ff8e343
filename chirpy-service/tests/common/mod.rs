#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PasswordHasher;
use chirpy_service::chirp::errors::ChirpError;
use chirpy_service::chirp::models::Chirp;
use chirpy_service::chirp::models::ChirpId;
use chirpy_service::chirp::ports::ChirpRepository;
use chirpy_service::chirp::service::ChirpService;
use chirpy_service::config::JwtConfig;
use chirpy_service::config::Platform;
use chirpy_service::inbound::http::router::create_router;
use chirpy_service::user::errors::UserError;
use chirpy_service::user::models::EmailAddress;
use chirpy_service::user::models::User;
use chirpy_service::user::ports::UserRepository;
use chirpy_service::user::service::UserService;
use serde_json::json;
use serde_json::Value;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application on a dev platform
    pub async fn spawn() -> Self {
        Self::spawn_on(Platform::Dev).await
    }

    /// Spawn the application in a background task and return TestApp
    pub async fn spawn_on(platform: Platform) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheap work factor keeps the suite fast
        let password_hasher =
            PasswordHasher::with_params(1024, 1, 1).expect("Failed to build password hasher");

        let store = Arc::new(InMemoryStore::default());
        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new(store.clone())),
            password_hasher,
        ));
        let chirp_service = Arc::new(ChirpService::new(Arc::new(
            InMemoryChirpRepository::new(store),
        )));

        let jwt = JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiration_seconds: 3600,
        };

        let router = create_router(user_service, chirp_service, jwt, platform);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
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

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user and return the response `data`
    pub async fn create_user(&self, email: &str, password: &str) -> Value {
        let response = self
            .post("/api/users")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"].clone()
    }

    /// Log in and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}

/// Shared in-memory tables.
///
/// Mirrors the schema constraints: deleting a user removes its chirps and a
/// chirp must reference an existing user.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    chirps: Mutex<Vec<Chirp>>,
}

pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.store.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.store.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }

    async fn delete_all(&self) -> Result<u64, UserError> {
        let mut users = self.store.users.lock().unwrap();
        let removed = users.len() as u64;
        users.clear();
        self.store.chirps.lock().unwrap().clear();
        Ok(removed)
    }
}

pub struct InMemoryChirpRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryChirpRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChirpRepository for InMemoryChirpRepository {
    async fn create(&self, chirp: Chirp) -> Result<Chirp, ChirpError> {
        let users = self.store.users.lock().unwrap();
        if !users.iter().any(|u| u.id == chirp.user_id) {
            return Err(ChirpError::UnknownAuthor(chirp.user_id.to_string()));
        }
        self.store.chirps.lock().unwrap().push(chirp.clone());
        Ok(chirp)
    }

    async fn list_all(&self) -> Result<Vec<Chirp>, ChirpError> {
        Ok(self.store.chirps.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpError> {
        let chirps = self.store.chirps.lock().unwrap();
        Ok(chirps.iter().find(|c| c.id == *id).cloned())
    }
}
