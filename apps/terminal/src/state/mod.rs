//! # State Module
//!
//! Shared state for the terminal application.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────────┐                  │
//! │  │  SessionState    │        │     ConfigState      │                  │
//! │  │                  │        │                      │                  │
//! │  │  Arc<Mutex<      │        │  store name, rates,  │                  │
//! │  │    PosSession    │        │  debounce window     │                  │
//! │  │  >>              │        │  (read-only)         │                  │
//! │  └──────────────────┘        └──────────────────────┘                  │
//! │                                                                         │
//! │  The POS runs on one logical thread of control; none of the session    │
//! │  operations are designed to be linearizable under concurrent access.   │
//! │  A host that introduces real concurrency therefore takes the ONE       │
//! │  session mutex around every operation — the same discipline the        │
//! │  single-threaded GUI loop gets for free.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::ConfigState;

use std::sync::{Arc, Mutex};

use crate::session::PosSession;

/// Shared handle to the one session per running terminal.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<PosSession>>,
}

impl SessionState {
    /// Wraps a signed-in session.
    pub fn new(session: PosSession) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PosSession) -> R,
    {
        let session = self.session.lock().expect("session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PosSession) -> R,
    {
        let mut session = self.session.lock().expect("session mutex poisoned");
        f(&mut session)
    }
}
