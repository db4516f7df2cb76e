use crate::error::PublishError;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::Client;
use kube::api::{Api, PostParams};
use pkg_constants::secret::CONFLICT_STATUS;

/// Capability to create a Secret in a namespace.
/// Implementations: the Kubernetes API (`KubeSecretSink`), in-memory stores in tests.
#[async_trait]
pub trait SecretSink: Send + Sync {
    /// Create `secret` in `namespace`. An existing object with the same
    /// name must yield `PublishError::AlreadyExists`, never an overwrite.
    async fn create(&self, namespace: &str, secret: &Secret) -> Result<Secret, PublishError>;
}

/// Creates Secrets through the cluster's core/v1 API.
pub struct KubeSecretSink {
    client: Client,
}

impl KubeSecretSink {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretSink for KubeSecretSink {
    async fn create(&self, namespace: &str, secret: &Secret) -> Result<Secret, PublishError> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        match api.create(&PostParams::default(), secret).await {
            Ok(created) => Ok(created),
            Err(kube::Error::Api(ae)) if ae.code == CONFLICT_STATUS => {
                Err(PublishError::AlreadyExists {
                    namespace: namespace.to_string(),
                    name: secret.metadata.name.clone().unwrap_or_default(),
                })
            }
            Err(e) => Err(PublishError::Api(e)),
        }
    }
}
