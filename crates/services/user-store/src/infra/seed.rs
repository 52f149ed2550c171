//! Sample data generation.
//!
//! Stands in for an upstream data source: a fresh store is seeded with a
//! fixed-size batch of generated users.

use domain::User;

/// First names drawn from for generated users
const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Elijah", "Sophia", "Lucas", "Isabella", "Mason",
];

/// Last names drawn from for generated users
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Brown", "Garcia", "Miller", "Davis", "Martinez", "Wilson", "Anderson",
    "Taylor",
];

/// Generate `count` sample users.
///
/// Names cycle through fixed pools, with the pairing shifted on each full
/// pass so consecutive passes do not repeat combinations. Emails carry an
/// index suffix and are unique within the batch; ids are fresh v4 UUIDs.
pub fn sample_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i + i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let email = format!(
                "{}.{}{}@example.com",
                first.to_lowercase(),
                last.to_lowercase(),
                i + 1
            );

            User::new(email, first.to_string(), last.to_string())
        })
        .collect()
}
