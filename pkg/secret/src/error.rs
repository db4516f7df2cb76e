use kube::config::KubeconfigError;
use thiserror::Error;

/// Errors raised while resolving the cluster target or publishing a Secret.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Dry-run was requested without `-o json|yaml`.
    #[error("no format has been specified. Use -o to specify a format")]
    NoOutputFormat,

    /// The kubeconfig could not be read or does not describe a usable context.
    #[error("cannot load kubeconfig: {0}")]
    Kubeconfig(#[from] KubeconfigError),

    /// The requested context is not present in the kubeconfig.
    #[error("context '{0}' not found in kubeconfig")]
    ContextNotFound(String),

    /// Building the API client failed.
    #[error("cannot connect to cluster: {0}")]
    Connect(#[source] kube::Error),

    /// The publisher was built for dry-run only.
    #[error("not connected to a cluster")]
    NotConnected,

    /// A Secret with this name already exists. It is never overwritten.
    #[error("secret '{name}' already exists in namespace '{namespace}'")]
    AlreadyExists { namespace: String, name: String },

    /// The API server rejected the request.
    #[error("kubernetes API error: {0}")]
    Api(#[source] kube::Error),

    #[error("cannot serialize secret as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot serialize secret as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot write output: {0}")]
    Write(#[from] std::io::Error),
}
