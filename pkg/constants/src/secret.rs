//! Kubernetes Secret constants.

/// `type` tag of an untyped Secret.
pub const SECRET_TYPE_OPAQUE: &str = "Opaque";

/// Data key used when `--key` is not given.
pub const DEFAULT_DATA_KEY: &str = "auth";

/// Namespace used when the kubeconfig context carries none.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Maximum length of a Secret name (DNS subdomain) or data key.
pub const MAX_NAME_LENGTH: usize = 253;

/// HTTP status the API server returns when the object already exists.
pub const CONFLICT_STATUS: u16 = 409;
