//! # Collaborator Services
//!
//! The excluded collaborators of the core, specified at their interface
//! boundary: catalog lookups, the sign-in credential check, and the
//! exchange-rate source. Each is an explicitly constructed object passed by
//! reference to the session — no hidden global state, no lazy singletons.

mod auth;
mod catalog;
mod rates;

pub use auth::CredentialStore;
pub use catalog::{Catalog, StaticCatalog};
pub use rates::{FixedRateSource, RateSource};
