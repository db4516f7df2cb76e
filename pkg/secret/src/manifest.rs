use crate::error::PublishError;
use k8s_openapi::ByteString;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use pkg_constants::secret::SECRET_TYPE_OPAQUE;
use pkg_types::request::OutputFormat;
use pkg_types::secret::{SecretIdentity, SecretPayload};
use std::collections::BTreeMap;

/// Assemble the Opaque Secret holding `payload` under `identity.data_key`.
/// `apiVersion` and `kind` are added by the serializer.
pub fn build_secret(identity: &SecretIdentity, payload: &SecretPayload) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(identity.name.clone()),
            namespace: Some(identity.namespace.clone()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(
            identity.data_key.clone(),
            ByteString(payload.as_bytes().to_vec()),
        )])),
        type_: Some(SECRET_TYPE_OPAQUE.to_string()),
        ..Default::default()
    }
}

/// Render `secret` as an applyable manifest. The result ends with a newline.
pub fn render_secret(secret: &Secret, format: OutputFormat) -> Result<String, PublishError> {
    match format {
        OutputFormat::Json => {
            let mut rendered = serde_json::to_string_pretty(secret)?;
            rendered.push('\n');
            Ok(rendered)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(secret)?),
        OutputFormat::None => Err(PublishError::NoOutputFormat),
    }
}
