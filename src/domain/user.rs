//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::config::ADULT_AGE;
use crate::domain::clock::{Clock, SystemClock};

/// User domain entity
///
/// Construction never fails: fields are accepted as given and any missing
/// identifier or timestamp is filled in. Name and email are not validated
/// here; shape checks live at the DTO boundary, with [`User::has_valid_email`]
/// as an explicit opt-in probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, immutable after construction.
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated id and current timestamps.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self::with_clock(&SystemClock, name, email, age)
    }

    /// Create a new user, reading timestamps from the given clock.
    pub fn with_clock(
        clock: &dyn Clock,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> Self {
        let now = clock.now();
        Self {
            id: Self::generate_id(),
            name: name.into(),
            email: email.into(),
            age,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new user with an explicit identifier.
    ///
    /// An empty identifier is treated as absent and replaced with a
    /// generated one.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> Self {
        let id = id.into();
        let mut user = Self::new(name, email, age);
        if !id.is_empty() {
            user.id = id;
        }
        user
    }

    /// Rehydrate a user from fully known fields (e.g. out of a store).
    pub fn from_parts(
        id: String,
        name: String,
        email: String,
        age: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            age,
            created_at,
            updated_at,
        }
    }

    /// Check whether the email looks like an address.
    ///
    /// Deliberately weak heuristic: there must be an `@`, and the part after
    /// the first `@` must contain a `.`. Not a full email grammar.
    pub fn has_valid_email(&self) -> bool {
        match self.email.split_once('@') {
            Some((_, domain)) => domain.contains('.'),
            None => false,
        }
    }

    fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    /// User display name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// User email address
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// User age in years, defaults to 0
    #[serde(default)]
    pub age: u32,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: String,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// User age in years
    pub age: u32,
    /// Derived at the boundary, never stored on the entity
    pub is_adult: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            is_adult: user.age >= ADULT_AGE,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
