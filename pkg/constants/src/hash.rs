//! Hash algorithm constants.

/// Selector of the default (and currently only) hash algorithm.
pub const DEFAULT_ALGORITHM: &str = "bcrypt";

/// Every selector recognized by `--algorithm`.
pub const SUPPORTED_ALGORITHMS: &[&str] = &["bcrypt"];

/// Cost substituted for the sentinel `0`.
pub const BCRYPT_DEFAULT_COST: u32 = 10;

/// Cost used by the CLI when `--cost` is not given.
pub const DEFAULT_COST: u32 = BCRYPT_DEFAULT_COST;

/// Lowest cost bcrypt accepts.
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const BCRYPT_MAX_COST: u32 = 31;
