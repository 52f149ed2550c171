//! Domain-level constants.

/// Number of sample users seeded into a fresh store
pub const DEFAULT_SAMPLE_USERS: usize = 20;
