use crate::secret::{SecretIdentity, SecretPayload};
use std::fmt;

/// Rendering used for dry-run output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Yaml,
    #[default]
    None,
}

impl OutputFormat {
    /// Map an `--output` flag value. Anything other than `json` or `yaml`
    /// (including no value at all) yields `None`; dry-run rejects it later.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("json") => OutputFormat::Json,
            Some("yaml") => OutputFormat::Yaml,
            _ => OutputFormat::None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::None => write!(f, "none"),
        }
    }
}

/// Everything needed to create or render one Secret.
/// Built once per invocation and consumed by the publisher.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub identity: SecretIdentity,
    pub payload: SecretPayload,
    pub dry_run: bool,
    pub output_format: OutputFormat,
}
