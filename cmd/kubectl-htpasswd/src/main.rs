use clap::{Parser, Subcommand};
use pkg_secret::ClusterTarget;
use pkg_types::config::{PluginConfigFile, default_config_path, load_config_file};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod create;
mod version;

#[derive(Parser)]
#[command(
    name = "kubectl-htpasswd",
    about = "kubectl plugin for generating/managing htpasswd secrets in kubernetes"
)]
struct Cli {
    /// Log debug output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to the kubeconfig file (default: $KUBECONFIG, then ~/.kube/config)
    #[arg(long, global = true, value_name = "PATH")]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use (default: current-context)
    #[arg(long, global = true, value_name = "NAME")]
    context: Option<String>,

    /// Path to the plugin defaults file (default: <config dir>/kubectl-htpasswd/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a htpasswd secret in kubernetes
    Create(create::CreateArgs),
    /// Display the version
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Create(args) => {
            // Merge: CLI args > config file > defaults
            let defaults: PluginConfigFile = match cli.config.or_else(default_config_path) {
                Some(path) => {
                    debug!("Config file: {}", path.display());
                    load_config_file(&path)?
                }
                None => PluginConfigFile::default(),
            };
            let target = ClusterTarget::new(cli.kubeconfig, cli.context);
            create::run(args, &target, defaults).await
        }
        Commands::Version => {
            version::print();
            Ok(())
        }
    }
}

/// Install the stderr log subscriber. Runs once, after flags are parsed,
/// so `--verbose` is known before the first event. `RUST_LOG` overrides it.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
