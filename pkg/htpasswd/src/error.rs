use thiserror::Error;

/// Errors raised while building htpasswd entries.
#[derive(Debug, Error)]
pub enum HtpasswdError {
    /// The hash routine rejected its input (cost out of range, password too long).
    #[error("hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// The user cannot be written to an htpasswd line.
    #[error("invalid user '{user}': {reason}")]
    InvalidUser { user: String, reason: &'static str },

    /// The credential at `position` (1-based) is not of the form `user=password`.
    /// The argument itself is not echoed; it may be a mistyped password.
    #[error("invalid credential #{position}: expected user=password")]
    MalformedPair { position: usize },
}
