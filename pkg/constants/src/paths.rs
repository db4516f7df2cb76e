//! Filesystem path constants.

/// Directory under the user config dir holding the plugin defaults file.
pub const CONFIG_DIR_NAME: &str = "kubectl-htpasswd";

/// Filename of the plugin defaults file inside `CONFIG_DIR_NAME`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";
