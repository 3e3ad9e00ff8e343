//! Authentication primitives for the chirpy service
//!
//! Three independent, stateless components:
//! - Password hashing (Argon2id)
//! - Session token issuance and validation (HS256 JWT)
//! - Bearer credential extraction from request headers
//!
//! None of them call each other or hold shared state. The signing secret is an
//! argument of every token operation, and the clock is injectable for tests.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let codec = TokenCodec::new();
//! let user_id = Uuid::new_v4();
//! let token = codec.issue(user_id, b"s3cret", Duration::hours(1)).unwrap();
//! assert_eq!(codec.validate(&token, b"s3cret").unwrap(), user_id);
//! ```
//!
//! ## Bearer Credentials
//! ```
//! use auth::bearer;
//!
//! assert_eq!(bearer::extract(Some("Bearer abc123")), Ok("abc123"));
//! assert!(bearer::extract(Some("Basic abc123")).is_err());
//! ```

pub mod bearer;
pub mod errors;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use bearer::BearerError;
pub use errors::AuthError;
pub use jwt::Claims;
pub use jwt::Clock;
pub use jwt::FixedClock;
pub use jwt::SystemClock;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
