use crate::algorithm::Algorithm;
use crate::error::HtpasswdError;
use pkg_constants::htpasswd::{FIELD_SEPARATOR, PAIR_SEPARATOR};
use pkg_types::secret::SecretPayload;
use std::fmt;
use tracing::{debug, warn};

/// One `user:hash` line of an htpasswd file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    user: String,
    hash: String,
}

impl CredentialEntry {
    /// Hash `password` for `user`.
    pub fn new(
        user: &str,
        password: &str,
        algorithm: Algorithm,
        cost: u32,
    ) -> Result<Self, HtpasswdError> {
        validate_user(user)?;
        let hash = algorithm.hash(password.as_bytes(), cost)?;
        Ok(Self {
            user: user.to_string(),
            hash,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

impl fmt::Display for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.user, FIELD_SEPARATOR, self.hash)
    }
}

fn validate_user(user: &str) -> Result<(), HtpasswdError> {
    let reason = if user.is_empty() {
        "user must not be empty"
    } else if user.contains(FIELD_SEPARATOR) {
        "user must not contain ':'"
    } else if user.contains(['\n', '\r']) {
        "user must not contain a line break"
    } else {
        return Ok(());
    };
    Err(HtpasswdError::InvalidUser {
        user: user.to_string(),
        reason,
    })
}

/// Build a single htpasswd line `user:<encoded hash>`.
///
/// `algorithm` is a selector string; unknown selectors fall back to bcrypt.
/// A `cost` of `0` selects the algorithm's default cost.
pub fn build_entry(
    user: &str,
    password: &str,
    algorithm: &str,
    cost: u32,
) -> Result<String, HtpasswdError> {
    let entry = CredentialEntry::new(user, password, Algorithm::from_selector(algorithm), cost)?;
    Ok(entry.to_string())
}

/// Split a `user=password` argument on the first `=` only, so passwords
/// may themselves contain `=`.
pub fn parse_pair(arg: &str) -> Option<(&str, &str)> {
    arg.split_once(PAIR_SEPARATOR)
}

/// Hash every `user=password` argument and join the lines into a payload.
/// The first failure aborts; entries built so far are dropped.
pub fn build_payload<S: AsRef<str>>(
    pairs: &[S],
    algorithm: &str,
    cost: u32,
) -> Result<SecretPayload, HtpasswdError> {
    let algorithm = Algorithm::from_selector(algorithm);
    debug!(
        "Building {} entries with algorithm={} cost={}",
        pairs.len(),
        algorithm,
        algorithm.effective_cost(cost)
    );

    let mut lines = Vec::with_capacity(pairs.len());
    for (index, pair) in pairs.iter().enumerate() {
        let (user, password) = parse_pair(pair.as_ref())
            .ok_or(HtpasswdError::MalformedPair { position: index + 1 })?;
        if password.is_empty() {
            warn!("Password for user '{}' is empty", user);
        }
        let entry = CredentialEntry::new(user, password, algorithm, cost)?;
        debug!("Built entry for user '{}'", entry.user());
        lines.push(entry.to_string());
    }
    Ok(SecretPayload::from_lines(&lines))
}
