use anyhow::Result;
use clap::Args;
use pkg_constants::hash::{DEFAULT_ALGORITHM, DEFAULT_COST};
use pkg_constants::secret::DEFAULT_DATA_KEY;
use pkg_htpasswd::build_payload;
use pkg_secret::{ClusterTarget, PublishError, SecretPublisher};
use pkg_types::config::PluginConfigFile;
use pkg_types::request::{OutputFormat, PublishRequest};
use pkg_types::validate::{validate_data_key, validate_secret_name};
use tracing::{debug, warn};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the secret to create
    secret_name: String,

    /// Credentials to store; only the first '=' separates user from password
    #[arg(required = true, value_name = "USER=PASSWORD")]
    pairs: Vec<String>,

    /// Print the k8s secret to stdout without creating it on the cluster
    #[arg(long)]
    dry_run: bool,

    /// Hash algorithm, one of [bcrypt]; unknown values fall back to bcrypt [default: bcrypt]
    #[arg(long, short)]
    algorithm: Option<String>,

    /// Hash algorithm cost, between 4 and 31; 0 selects the algorithm default [default: 10]
    #[arg(long, short)]
    cost: Option<u32>,

    /// Target namespace for the k8s secret [default: namespace of the kubeconfig context]
    #[arg(long, short)]
    namespace: Option<String>,

    /// Output format for --dry-run, one of [json, yaml]
    #[arg(long, short)]
    output: Option<String>,

    /// Key in the kubernetes secret data object [default: auth]
    #[arg(long, short)]
    key: Option<String>,
}

pub async fn run(args: CreateArgs, target: &ClusterTarget, defaults: PluginConfigFile) -> Result<()> {
    let algorithm = args
        .algorithm
        .or(defaults.algorithm)
        .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());
    let cost = args.cost.or(defaults.cost).unwrap_or(DEFAULT_COST);
    let key = args
        .key
        .or(defaults.key)
        .unwrap_or_else(|| DEFAULT_DATA_KEY.to_string());
    let output = args.output.or(defaults.output);
    let output_format = OutputFormat::from_flag(output.as_deref());

    // Usage errors surface before any hashing or cluster access.
    validate_secret_name(&args.secret_name)?;
    validate_data_key(&key)?;
    if args.dry_run && output_format == OutputFormat::None {
        return Err(PublishError::NoOutputFormat.into());
    }
    if let (Some(value), OutputFormat::None) = (output.as_deref(), output_format) {
        warn!("Ignoring unknown output format '{}'", value);
    }

    debug!("Set secretName {}", args.secret_name);
    debug!("Set algorithm {} and cost {}", algorithm, cost);
    let payload = build_payload(&args.pairs, &algorithm, cost)?;
    debug!("Built {} htpasswd entries", args.pairs.len());

    debug!(
        "Invoke kubernetes client with dry-run={} namespace={:?} secretName={} format={} key={}",
        args.dry_run, args.namespace, args.secret_name, output_format, key
    );
    let publisher =
        SecretPublisher::connect(target, args.namespace.as_deref(), args.dry_run).await?;
    debug!("Kubernetes client created for namespace {}", publisher.namespace());

    let request = PublishRequest {
        identity: publisher.identity(&args.secret_name, &key),
        payload,
        dry_run: args.dry_run,
        output_format,
    };
    publisher.create(request, &mut std::io::stdout()).await?;
    Ok(())
}
