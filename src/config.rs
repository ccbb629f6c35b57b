//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Users
// =============================================================================

/// Age at which a user counts as an adult
pub const ADULT_AGE: u32 = 18;
