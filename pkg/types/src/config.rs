use pkg_constants::paths::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Plugin defaults file (YAML).
///
/// Every field is optional; a value given on the command line always wins.
///
/// Example `config.yaml`:
/// ```yaml
/// algorithm: bcrypt
/// cost: 12
/// key: htpasswd
/// output: yaml
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfigFile {
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub cost: Option<u32>,
    #[serde(default, alias = "data-key")]
    pub key: Option<String>,
    #[serde(default, alias = "output-format")]
    pub output: Option<String>,
}

/// Location of the defaults file under the user's config directory,
/// e.g. `~/.config/kubectl-htpasswd/config.yaml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(
    path: &Path,
) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => {
            return Err(anyhow::anyhow!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ));
        }
    };
    // An empty file deserializes to `null`, which is not a mapping.
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_yaml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
    Ok(config)
}
