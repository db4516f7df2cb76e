//! htpasswd entry generation.
//!
//! Turns `user=password` arguments into `user:<hash>` lines and joins them
//! into the payload stored in a Secret.

pub mod algorithm;
pub mod entry;
pub mod error;

pub use algorithm::Algorithm;
pub use entry::{CredentialEntry, build_entry, build_payload, parse_pair};
pub use error::HtpasswdError;
