//! Centralized constants for kubectl-htpasswd.
//!
//! Defaults for CLI flags and the fixed parts of the Secret wire format
//! live here, so the front end and the library crates agree on them.

pub mod hash;
pub mod htpasswd;
pub mod paths;
pub mod secret;
