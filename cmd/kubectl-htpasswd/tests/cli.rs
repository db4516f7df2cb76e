//! CLI integration tests. All of them run in dry-run mode; none needs a cluster.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: local
  cluster:
    server: https://127.0.0.1:6443
users:
- name: dev
  user:
    token: dev-token
contexts:
- name: team-a
  context:
    cluster: local
    user: dev
    namespace: team-a
- name: bare
  context:
    cluster: local
    user: dev
current-context: team-a
"#;

struct TestResult {
    stdout: String,
    stderr: String,
    success: bool,
}

/// Run the plugin with an isolated (absent) defaults file.
fn run_plugin(dir: &TempDir, args: &[&str]) -> TestResult {
    let config = dir.path().join("no-config.yaml");
    let output = Command::new(env!("CARGO_BIN_EXE_kubectl-htpasswd"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute kubectl-htpasswd");

    TestResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    }
}

fn write_kubeconfig(dir: &Path) -> String {
    let path = dir.join("kubeconfig");
    std::fs::write(&path, KUBECONFIG).unwrap();
    path.to_str().unwrap().to_string()
}

/// Decode `data.<key>` of a rendered Secret into its htpasswd lines.
fn entries(data: &str) -> Vec<String> {
    let bytes = STANDARD.decode(data).expect("data is not base64");
    String::from_utf8(bytes)
        .unwrap()
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn assert_entry(line: &str, user: &str, password: &str) {
    let (got_user, hash) = line.split_once(':').expect("missing ':' separator");
    assert_eq!(got_user, user);
    assert!(
        bcrypt::verify(password, hash).unwrap(),
        "hash for {} does not verify",
        user
    );
}

#[test]
fn test_dry_run_json_with_default_cost() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(
        &dir,
        &[
            "create",
            "mysecret",
            "alice=pass123",
            "bob=pass456",
            "--dry-run",
            "-o",
            "json",
            "-n",
            "test",
        ],
    );
    assert!(result.success, "stderr: {}", result.stderr);

    let v: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(v["apiVersion"], "v1");
    assert_eq!(v["kind"], "Secret");
    assert_eq!(v["type"], "Opaque");
    assert_eq!(v["metadata"]["name"], "mysecret");
    assert_eq!(v["metadata"]["namespace"], "test");
    assert_eq!(v["data"].as_object().unwrap().len(), 1);

    let lines = entries(v["data"]["auth"].as_str().unwrap());
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("alice:$2a$10$"));
    assert_entry(&lines[0], "alice", "pass123");
    assert_entry(&lines[1], "bob", "pass456");
}

#[test]
fn test_dry_run_yaml_with_custom_key() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(
        &dir,
        &[
            "create",
            "basic-auth",
            "carol=a=b=c",
            "--dry-run",
            "--output",
            "yaml",
            "--namespace",
            "ops",
            "--key",
            "htpasswd",
            "--cost",
            "4",
        ],
    );
    assert!(result.success, "stderr: {}", result.stderr);

    let v: serde_yaml::Value = serde_yaml::from_str(&result.stdout).unwrap();
    assert_eq!(v["metadata"]["name"].as_str(), Some("basic-auth"));
    assert_eq!(v["metadata"]["namespace"].as_str(), Some("ops"));
    assert!(v["data"]["auth"].is_null());

    let lines = entries(v["data"]["htpasswd"].as_str().unwrap());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("carol:$2a$04$"));
    // Only the first '=' separates user and password.
    assert_entry(&lines[0], "carol", "a=b=c");
}

#[test]
fn test_unknown_algorithm_falls_back_to_bcrypt() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(
        &dir,
        &[
            "create", "mysecret", "alice=pass123", "--dry-run", "-o", "json", "-n", "test",
            "-a", "md5", "-c", "4",
        ],
    );
    assert!(result.success, "stderr: {}", result.stderr);

    let v: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let lines = entries(v["data"]["auth"].as_str().unwrap());
    assert!(lines[0].starts_with("alice:$2a$04$"));
    assert_entry(&lines[0], "alice", "pass123");
}

#[test]
fn test_dry_run_without_format_fails() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(
        &dir,
        &["create", "mysecret", "alice=pass123", "--dry-run", "-n", "test"],
    );
    assert!(!result.success);
    assert!(result.stdout.is_empty());
    assert!(
        result.stderr.contains("no format has been specified"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_missing_credentials_fails() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(&dir, &["create", "mysecret", "--dry-run", "-o", "json"]);
    assert!(!result.success);
    assert!(result.stdout.is_empty());
}

#[test]
fn test_malformed_pair_fails() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(
        &dir,
        &[
            "create", "mysecret", "alice=pass123", "bob", "--dry-run", "-o", "json", "-n",
            "test", "-c", "4",
        ],
    );
    assert!(!result.success);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("expected user=password"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("#2"), "stderr: {}", result.stderr);
    assert!(!result.stderr.contains("'bob'"), "stderr: {}", result.stderr);
}

#[test]
fn test_cost_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    for cost in ["3", "32"] {
        let result = run_plugin(
            &dir,
            &[
                "create", "mysecret", "alice=pass123", "--dry-run", "-o", "json", "-n", "test",
                "-c", cost,
            ],
        );
        assert!(!result.success, "cost {} should be rejected", cost);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("hash error"), "stderr: {}", result.stderr);
    }
}

#[test]
fn test_invalid_secret_name_fails() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(
        &dir,
        &["create", "My_Secret", "alice=pass123", "--dry-run", "-o", "json", "-n", "test"],
    );
    assert!(!result.success);
    assert!(result.stderr.contains("secret name"), "stderr: {}", result.stderr);
}

#[test]
fn test_namespace_from_kubeconfig_context() {
    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(dir.path());

    let result = run_plugin(
        &dir,
        &[
            "--kubeconfig", &kubeconfig, "create", "mysecret", "alice=pass123", "--dry-run",
            "-o", "json", "-c", "4",
        ],
    );
    assert!(result.success, "stderr: {}", result.stderr);
    let v: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(v["metadata"]["namespace"], "team-a");

    let result = run_plugin(
        &dir,
        &[
            "--kubeconfig", &kubeconfig, "--context", "bare", "create", "mysecret",
            "alice=pass123", "--dry-run", "-o", "json", "-c", "4",
        ],
    );
    assert!(result.success, "stderr: {}", result.stderr);
    let v: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(v["metadata"]["namespace"], "default");
}

#[test]
fn test_explicit_namespace_beats_kubeconfig() {
    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(dir.path());
    let result = run_plugin(
        &dir,
        &[
            "--kubeconfig", &kubeconfig, "create", "mysecret", "alice=pass123", "--dry-run",
            "-o", "json", "-n", "ops", "-c", "4",
        ],
    );
    assert!(result.success, "stderr: {}", result.stderr);
    let v: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(v["metadata"]["namespace"], "ops");
}

#[test]
fn test_unknown_context_fails() {
    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(dir.path());
    let result = run_plugin(
        &dir,
        &[
            "--kubeconfig", &kubeconfig, "--context", "prod", "create", "mysecret",
            "alice=pass123", "--dry-run", "-o", "json", "-c", "4",
        ],
    );
    assert!(!result.success);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("context 'prod'"), "stderr: {}", result.stderr);
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "cost: 4\nkey: users\noutput: yaml\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_kubectl-htpasswd"))
        .arg("--config")
        .arg(&config)
        .args(["create", "mysecret", "alice=pass123", "--dry-run", "-n", "test"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let v: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    let lines = entries(v["data"]["users"].as_str().unwrap());
    assert!(lines[0].starts_with("alice:$2a$04$"));

    // Flags win over the file.
    let output = Command::new(env!("CARGO_BIN_EXE_kubectl-htpasswd"))
        .arg("--config")
        .arg(&config)
        .args([
            "create", "mysecret", "alice=pass123", "--dry-run", "-n", "test", "-o", "json",
            "-k", "auth",
        ])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(v["data"]["auth"].is_string());
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(
        &dir,
        &[
            "-v", "create", "mysecret", "alice=pass123", "--dry-run", "-o", "json", "-n",
            "test", "-c", "4",
        ],
    );
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(serde_json::from_str::<serde_json::Value>(&result.stdout).is_ok());
    assert!(result.stderr.contains("DEBUG"), "stderr: {}", result.stderr);
    assert!(!result.stderr.contains("pass123"), "password leaked into logs");
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let result = run_plugin(&dir, &["version"]);
    assert!(result.success);
    assert!(result.stdout.contains("commit : "));
    assert!(result.stdout.contains("date   : "));
    assert!(result.stdout.contains("version: "));
}
