//! Cluster target resolution from kubeconfig.

use crate::error::PublishError;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use pkg_constants::secret::DEFAULT_NAMESPACE;
use std::path::PathBuf;
use tracing::debug;

/// Which kubeconfig, and which context in it, to talk to.
#[derive(Debug, Clone, Default)]
pub struct ClusterTarget {
    /// Explicit kubeconfig path. `None` follows `KUBECONFIG`, then `~/.kube/config`.
    pub kubeconfig: Option<PathBuf>,
    /// Context to use instead of `current-context`.
    pub context: Option<String>,
}

impl ClusterTarget {
    pub fn new(kubeconfig: Option<PathBuf>, context: Option<String>) -> Self {
        Self {
            kubeconfig,
            context,
        }
    }

    /// Read the kubeconfig this target points at.
    pub fn load_kubeconfig(&self) -> Result<Kubeconfig, PublishError> {
        let kubeconfig = match &self.kubeconfig {
            Some(path) => {
                debug!("Reading kubeconfig from {}", path.display());
                Kubeconfig::read_from(path)?
            }
            None => {
                debug!("Reading kubeconfig from KUBECONFIG or the default location");
                Kubeconfig::read()?
            }
        };
        Ok(kubeconfig)
    }

    /// Namespace of the selected context.
    pub fn namespace(&self, kubeconfig: &Kubeconfig) -> Result<String, PublishError> {
        context_namespace(kubeconfig, self.context.as_deref())
    }

    /// Build an API client for the selected context.
    pub async fn client(&self, kubeconfig: Kubeconfig) -> Result<Client, PublishError> {
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..Default::default()
        };
        let config = Config::from_custom_kubeconfig(kubeconfig, &options).await?;
        debug!("Connecting to cluster at {}", config.cluster_url);
        Client::try_from(config).map_err(PublishError::Connect)
    }
}

/// Namespace configured on `context` (or `current-context` when `None`).
///
/// A kubeconfig without any current context, or a context without a
/// namespace, resolves to `default`. Naming a context that does not
/// exist is an error.
pub fn context_namespace(
    kubeconfig: &Kubeconfig,
    context: Option<&str>,
) -> Result<String, PublishError> {
    let Some(name) = context.or(kubeconfig.current_context.as_deref()) else {
        debug!("No current context, using namespace {}", DEFAULT_NAMESPACE);
        return Ok(DEFAULT_NAMESPACE.to_string());
    };
    let named = kubeconfig
        .contexts
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| PublishError::ContextNotFound(name.to_string()))?;
    let namespace = named
        .context
        .as_ref()
        .and_then(|c| c.namespace.clone())
        .filter(|ns| !ns.is_empty())
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    debug!("Context {} resolves to namespace {}", name, namespace);
    Ok(namespace)
}
