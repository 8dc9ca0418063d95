//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the messaging backend:
//! - Password hashing (Argon2id)
//! - Signed, expiring identity tokens (JWT)
//!
//! The service composes these at its edges; nothing in here touches storage
//! or performs I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = tokens.issue(42).unwrap();
//! assert_eq!(tokens.validate(&token).unwrap(), 42);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenService;
