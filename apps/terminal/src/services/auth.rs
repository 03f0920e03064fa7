//! # Credential Store
//!
//! The authentication collaborator at its interface boundary: a single
//! boolean check that gates session construction. The session never
//! re-validates identity afterward.

use std::collections::HashMap;

/// In-memory user-id → PIN store.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    pins: HashMap<String, String>,
}

impl CredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CredentialStore::default()
    }

    /// Registers (or replaces) a user's PIN.
    pub fn register(&mut self, user_id: impl Into<String>, pin: impl Into<String>) {
        self.pins.insert(user_id.into(), pin.into());
    }

    /// Checks a user-id + PIN pair.
    pub fn authenticate(&self, user_id: &str, pin: &str) -> bool {
        self.pins.get(user_id).map(|p| p == pin).unwrap_or(false)
    }

    /// The store seeded for the demo terminal.
    pub fn demo_users() -> Self {
        let mut store = CredentialStore::new();
        store.register("1001", "4321");
        store.register("1002", "8888");
        store
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate() {
        let store = CredentialStore::demo_users();
        assert!(store.authenticate("1001", "4321"));
        assert!(!store.authenticate("1001", "0000"));
        assert!(!store.authenticate("9999", "4321"));
    }
}
