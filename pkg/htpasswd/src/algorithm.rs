use crate::error::HtpasswdError;
use pkg_constants::hash::{
    BCRYPT_DEFAULT_COST, BCRYPT_MAX_COST, BCRYPT_MIN_COST, SUPPORTED_ALGORITHMS,
};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::warn;

/// Password hash algorithm used for htpasswd entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// bcrypt in modular-crypt form (`$2a$<cost>$<salt><digest>`).
    #[default]
    Bcrypt,
}

impl Algorithm {
    /// Resolve an `--algorithm` value.
    ///
    /// Unknown selectors do not fail: they fall back to the default
    /// algorithm, and the substitution is logged.
    pub fn from_selector(selector: &str) -> Self {
        if !Self::is_supported(selector) {
            let fallback = Algorithm::default();
            warn!(
                "Unknown algorithm '{}', falling back to {} (supported: {})",
                selector,
                fallback,
                SUPPORTED_ALGORITHMS.join(", ")
            );
            return fallback;
        }
        match selector {
            "bcrypt" => Algorithm::Bcrypt,
            _ => Algorithm::default(),
        }
    }

    /// Whether `selector` names an algorithm without falling back.
    pub fn is_supported(selector: &str) -> bool {
        SUPPORTED_ALGORITHMS.contains(&selector)
    }

    /// Cost used when the caller passes `0`.
    pub fn default_cost(self) -> u32 {
        match self {
            Algorithm::Bcrypt => BCRYPT_DEFAULT_COST,
        }
    }

    /// Costs the hash routine accepts.
    pub fn cost_range(self) -> RangeInclusive<u32> {
        match self {
            Algorithm::Bcrypt => BCRYPT_MIN_COST..=BCRYPT_MAX_COST,
        }
    }

    /// Replace the `0` sentinel with the default cost.
    pub fn effective_cost(self, cost: u32) -> u32 {
        if cost == 0 { self.default_cost() } else { cost }
    }

    /// Hash `password` into the algorithm's self-describing encoding.
    /// Out-of-range costs are rejected by the hash routine itself.
    pub fn hash(self, password: &[u8], cost: u32) -> Result<String, HtpasswdError> {
        match self {
            Algorithm::Bcrypt => {
                // Passwords over 72 bytes are an error rather than silently truncated.
                let parts =
                    bcrypt::non_truncating_hash_with_result(password, self.effective_cost(cost))?;
                Ok(parts.format_for_version(bcrypt::Version::TwoA))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bcrypt => write!(f, "bcrypt"),
        }
    }
}
