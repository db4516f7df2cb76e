//! Secret materialization.
//!
//! Builds the Kubernetes Secret holding the htpasswd payload and either
//! creates it through a [`sink::SecretSink`] or renders it for dry-run.

pub mod error;
pub mod kubeconfig;
pub mod manifest;
pub mod publisher;
pub mod sink;

pub use error::PublishError;
pub use kubeconfig::ClusterTarget;
pub use publisher::SecretPublisher;
pub use sink::{KubeSecretSink, SecretSink};
