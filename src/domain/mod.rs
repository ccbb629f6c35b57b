//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! DDD: Domain layer has NO external dependencies (except error types).
//! Contains: Entities, Value Objects, Domain Services.

pub mod clock;
pub mod user;

pub use clock::{Clock, FixedClock, SystemClock};
pub use user::{CreateUser, User, UserResponse};
