//! User Core - A layered user-management library
//!
//! This crate provides a clean architecture core for user management,
//! following DDD, SOLID, and DRY principles.
//!
//! # Architecture Layers
//!
//! - **config**: Application constants
//! - **domain**: Core business entities and logic
//! - **repository**: Data access port and in-memory implementation
//! - **services**: Application use cases and business logic
//! - **errors**: Centralized error handling
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use user_core::{CreateUser, InMemoryUserStore, UserManager, UserResponse, UserService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> user_core::AppResult<()> {
//! let service = UserManager::new(Arc::new(InMemoryUserStore::new()));
//!
//! let user = service
//!     .create_user(CreateUser {
//!         name: "Leo".to_string(),
//!         email: "leo@gmail.com".to_string(),
//!         age: 30,
//!     })
//!     .await?;
//!
//! let response = UserResponse::from(user);
//! assert!(response.is_adult);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::{Clock, CreateUser, FixedClock, SystemClock, User, UserResponse};
pub use errors::{AppError, AppResult};
pub use repository::{InMemoryUserStore, UserRepository};
pub use services::{UserManager, UserService};
