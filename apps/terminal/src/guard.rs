//! # Button Protection
//!
//! A short per-button cooldown engaged after a successful product add or
//! payment, absorbing the accidental double-activation a single physical tap
//! can produce on a touchscreen.
//!
//! This is debounce, not business logic, but it changes observable
//! responsiveness and is part of the terminal's contract. It is plain data:
//! a map of monotonic engage times checked on the next activation. There is
//! no timer thread; re-engaging a key replaces its window.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default protection window.
pub const DEFAULT_PROTECT_WINDOW: Duration = Duration::from_millis(500);

/// Per-button cooldown tracker.
#[derive(Debug)]
pub struct ButtonGuard {
    window: Duration,
    engaged: HashMap<String, Instant>,
}

impl ButtonGuard {
    /// Creates a guard with the given window.
    pub fn new(window: Duration) -> Self {
        ButtonGuard {
            window,
            engaged: HashMap::new(),
        }
    }

    /// Starts (or restarts) the protection window for a button key.
    pub fn engage(&mut self, key: &str) {
        self.engage_at(key, Instant::now());
    }

    /// Whether the button is still inside its protection window.
    pub fn is_protected(&self, key: &str) -> bool {
        self.is_protected_at(key, Instant::now())
    }

    fn engage_at(&mut self, key: &str, at: Instant) {
        self.engaged.insert(key.to_string(), at);
    }

    fn is_protected_at(&self, key: &str, at: Instant) -> bool {
        match self.engaged.get(key) {
            Some(&engaged) => at.duration_since(engaged) < self.window,
            None => false,
        }
    }
}

impl Default for ButtonGuard {
    fn default() -> Self {
        ButtonGuard::new(DEFAULT_PROTECT_WINDOW)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
