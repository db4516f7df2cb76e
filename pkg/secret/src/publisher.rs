use crate::error::PublishError;
use crate::kubeconfig::ClusterTarget;
use crate::manifest::{build_secret, render_secret};
use crate::sink::{KubeSecretSink, SecretSink};
use pkg_types::request::PublishRequest;
use pkg_types::secret::SecretIdentity;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Creates one htpasswd Secret in a cluster, or renders it in dry-run mode.
pub struct SecretPublisher {
    namespace: String,
    sink: Option<Arc<dyn SecretSink>>,
}

impl SecretPublisher {
    /// Resolve the target namespace and open the cluster handle.
    ///
    /// A non-empty `namespace` wins over the kubeconfig context. The
    /// kubeconfig is only read when it is actually needed: to resolve the
    /// namespace, or to connect when not in dry-run mode.
    pub async fn connect(
        target: &ClusterTarget,
        namespace: Option<&str>,
        dry_run: bool,
    ) -> Result<Self, PublishError> {
        let mut kubeconfig = None;
        let namespace = match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => ns.to_string(),
            None => {
                let kc = target.load_kubeconfig()?;
                let ns = target.namespace(&kc)?;
                kubeconfig = Some(kc);
                ns
            }
        };

        if dry_run {
            debug!("Dry-run, not connecting to the cluster");
            return Ok(Self {
                namespace,
                sink: None,
            });
        }

        let kubeconfig = match kubeconfig {
            Some(kc) => kc,
            None => target.load_kubeconfig()?,
        };
        let client = target.client(kubeconfig).await?;
        Ok(Self {
            namespace,
            sink: Some(Arc::new(KubeSecretSink::new(client))),
        })
    }

    /// Publisher backed by an arbitrary sink.
    pub fn with_sink(namespace: impl Into<String>, sink: Arc<dyn SecretSink>) -> Self {
        Self {
            namespace: namespace.into(),
            sink: Some(sink),
        }
    }

    /// Namespace resolved at construction.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Identity of a Secret named `name` in the resolved namespace.
    pub fn identity(&self, name: &str, data_key: &str) -> SecretIdentity {
        SecretIdentity {
            namespace: self.namespace.clone(),
            name: name.to_string(),
            data_key: data_key.to_string(),
        }
    }

    /// Create the Secret, or in dry-run mode write its manifest to `out`.
    /// Nothing is written to `out` unless rendering succeeded.
    pub async fn create<W: Write + ?Sized>(
        &self,
        request: PublishRequest,
        out: &mut W,
    ) -> Result<(), PublishError> {
        let PublishRequest {
            identity,
            payload,
            dry_run,
            output_format,
        } = request;
        let secret = build_secret(&identity, &payload);

        if dry_run {
            debug!(
                "Rendering secret {}/{} as {}",
                identity.namespace, identity.name, output_format
            );
            let rendered = render_secret(&secret, output_format)?;
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
            return Ok(());
        }

        let sink = self.sink.as_ref().ok_or(PublishError::NotConnected)?;
        debug!(
            "Creating secret {}/{} with key {} ({} bytes)",
            identity.namespace,
            identity.name,
            identity.data_key,
            payload.len()
        );
        sink.create(&identity.namespace, &secret).await?;
        info!(
            "Secret {} created successfully in namespace {}",
            identity.name, identity.namespace
        );
        Ok(())
    }
}
