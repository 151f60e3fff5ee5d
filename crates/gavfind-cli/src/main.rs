//! CLI entry point for gavfind.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, client
//! construction, and exit codes. All business logic lives in the `gavfind-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use gavfind_app::{
    LookupInput, LookupQuery, ManifestsInput, SearchInput, load_config, run_lookup, run_manifests,
    run_search,
};
use gavfind_search::{CoordinateQuery, HttpSearchClient};
use gavfind_settings::{DEFAULT_CONFIG_FILE, Overrides, ResolvedConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "gavfind",
    version,
    about = "Identify library jars by SHA-1 and emit Maven, Gradle, and Ant manifests"
)]
struct Cli {
    /// Path to gavfind config TOML. A missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Override the search service base URL.
    #[arg(long)]
    url: Option<String>,

    /// Override the network retry budget.
    #[arg(long)]
    retries: Option<u32>,

    /// Log filter (trace, debug, info, warn, error). Defaults to info, or debug in dev mode.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash libraries, resolve them online, and write the report and build files.
    Search {
        /// CSV to resolve (defaults to the configured hash file). An earlier report works too.
        #[arg(long)]
        input: Option<Utf8PathBuf>,

        /// Directory for the report and build files.
        #[arg(long)]
        out_dir: Option<Utf8PathBuf>,

        /// Skip scanning library paths; resolve the existing CSV as-is.
        #[arg(long)]
        no_scan: bool,
    },

    /// Write build files from the found rows of an existing report, offline.
    Manifests {
        /// Report CSV from an earlier search.
        #[arg(long)]
        input: Utf8PathBuf,

        #[arg(long)]
        out_dir: Option<Utf8PathBuf>,
    },

    /// Look up one artifact and print its coordinates as JSON.
    Lookup {
        /// Content hash to search for.
        #[arg(long)]
        sha1: Option<String>,

        #[arg(long)]
        group: Option<String>,

        #[arg(long)]
        artifact: Option<String>,

        #[arg(long)]
        version: Option<String>,

        #[arg(long, default_value = "jar")]
        packaging: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = load(&cli);
    let default_level = loaded
        .as_ref()
        .map(ResolvedConfig::default_log_level)
        .unwrap_or("info");
    init_logging(cli.log_level.as_deref().unwrap_or(default_level));

    let result = loaded.and_then(|config| run(cli.cmd, &config));
    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load(cli: &Cli) -> anyhow::Result<ResolvedConfig> {
    let config_text = read_config_text(&cli.config)?;
    let out_dir = match &cli.cmd {
        Commands::Search { out_dir, .. } | Commands::Manifests { out_dir, .. } => out_dir.clone(),
        Commands::Lookup { .. } => None,
    };
    let overrides = Overrides {
        url: cli.url.clone(),
        retries: cli.retries,
        out_dir: out_dir.map(Utf8PathBuf::into_string),
    };
    load_config(&config_text, overrides).with_context(|| format!("load {}", cli.config))
}

fn read_config_text(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn search_client(config: &ResolvedConfig) -> anyhow::Result<HttpSearchClient> {
    let client = HttpSearchClient::new(&config.url).context("create search client")?;
    Ok(match &config.username {
        Some(username) => {
            client.with_credentials(username, config.password.clone().unwrap_or_default())
        }
        None => client,
    })
}

fn run(cmd: Commands, config: &ResolvedConfig) -> anyhow::Result<ExitCode> {
    match cmd {
        Commands::Search { input, no_scan, .. } => {
            let client = search_client(config)?;
            let output = run_search(SearchInput {
                config,
                search: &client,
                input: input.as_deref(),
                scan: !no_scan,
            })?;
            let counts = output.resolution.counts();
            tracing::info!(
                duration_ms = output.duration_ms(),
                found = counts.found,
                exceptions = counts.exceptions,
                not_found = counts.unknown,
                "report written to {}",
                output.report_path
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Manifests { input, .. } => {
            let output = run_manifests(ManifestsInput {
                config,
                input: &input,
            })?;
            tracing::info!(
                dependencies = output.artifacts.len(),
                "manifests written to {}",
                config.out_dir
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lookup {
            sha1,
            group,
            artifact,
            version,
            packaging,
        } => {
            let query = match (sha1, group, artifact, version) {
                (Some(sha1), None, None, None) => LookupQuery::Sha1(sha1),
                (None, Some(group), Some(artifact), Some(version)) => LookupQuery::Coordinates(
                    CoordinateQuery::jar(group, artifact, version).with_packaging(packaging),
                ),
                _ => anyhow::bail!("lookup needs either --sha1, or --group, --artifact and --version"),
            };
            let client = search_client(config)?;
            match run_lookup(LookupInput {
                search: &client,
                query: &query,
            })? {
                Some(identity) => {
                    let json =
                        serde_json::to_string_pretty(&identity).context("serialize identity")?;
                    println!("{json}");
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::FAILURE),
            }
        }
    }
}
