use anyhow::{Result, bail};
use pkg_constants::secret::MAX_NAME_LENGTH;

/// Validate a Kubernetes object name (RFC 1123 DNS subdomain).
/// Rules: lowercase `[a-z0-9.-]`, max 253 chars, must start and end with an alphanumeric.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("secret name must not be empty");
    }
    if name.len() > MAX_NAME_LENGTH {
        bail!(
            "secret name '{}' exceeds {} characters (got {})",
            name,
            MAX_NAME_LENGTH,
            name.len()
        );
    }
    let alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    if !name.starts_with(alnum) || !name.ends_with(alnum) {
        bail!(
            "secret name '{}' must start and end with a lowercase letter or digit",
            name
        );
    }
    if !name.chars().all(|c| alnum(c) || c == '-' || c == '.') {
        bail!(
            "secret name '{}' must contain only lowercase letters, digits, '-' and '.'",
            name
        );
    }
    Ok(())
}

/// Validate a key of a Secret's `data` map.
/// Rules: `[-._a-zA-Z0-9]+`, max 253 chars.
pub fn validate_data_key(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("data key must not be empty");
    }
    if key.len() > MAX_NAME_LENGTH {
        bail!(
            "data key '{}' exceeds {} characters (got {})",
            key,
            MAX_NAME_LENGTH,
            key.len()
        );
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        bail!(
            "data key '{}' must contain only letters, digits, '-', '_' and '.'",
            key
        );
    }
    Ok(())
}
