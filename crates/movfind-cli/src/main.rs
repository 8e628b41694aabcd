//! movfind - movie search CLI backed by the TMDB API.

/// Application configuration (TOML).
mod config;
/// Terminal UI components.
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use url::Url;

use crate::config::{ApiConfig, AppConfig, resolve_config_path};
use crate::tui::run_search_view;
use movfind_api::tmdb::{LocalTmdbApi, SearchParams, TmdbClient};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search for movies and print the results.
    Search(SearchArgs),
    /// Browse search results interactively.
    Tui(TuiArgs),
    /// Manage the config file.
    Config(ConfigCommand),
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write a template config file if none exists.
    Init,
    /// Print the resolved config file path.
    Path,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "Matrix").
    #[arg(long, required = true)]
    query: String,
    /// Result page (default: 1).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `tui` subcommand.
#[derive(clap::Args)]
struct TuiArgs {
    /// Initial search query.
    #[arg(long)]
    query: Option<String>,
}

/// Builds a `TmdbClient` from the environment and config file.
///
/// The API key comes from the `TMDB_API_KEY` environment variable,
/// falling back to `api.api_key` in `config.toml`.
///
/// # Errors
///
/// Returns an error if no API key is configured, the base URL override
/// is invalid, or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(dir: Option<&PathBuf>) -> Result<TmdbClient> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let api_key = match std::env::var("TMDB_API_KEY") {
        Ok(key) => key,
        Err(_) => config.api.api_key.with_context(|| {
            format!(
                "no API key: set TMDB_API_KEY or api.api_key in {}",
                config_path.display()
            )
        })?,
    };

    let mut builder = TmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(base_url) = config.api.base_url {
        let url = Url::parse(&base_url)
            .with_context(|| format!("invalid api.base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }

    builder.build().context("failed to build TMDB client")
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(dir)?;

    let params = SearchParams::new(&args.query).page(args.page);
    let response = client
        .search_movie(&params)
        .await
        .context("TMDB search/movie request failed")?;

    tracing::info!("Total results: {}", response.total_results);
    tracing::info!("Page {} of {}", args.page, response.total_pages);
    tracing::info!("ID\tTitle\t\t\tReleaseDate\tPoster");
    for movie in &response.results {
        let date = if movie.release_date.is_empty() {
            "-"
        } else {
            movie.release_date.as_str()
        };
        tracing::info!(
            "{}\t{}\t{}\t{}",
            movie.id,
            movie.title,
            date,
            movie.poster_url().as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

/// Runs the `tui` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the TUI fails.
#[instrument(skip_all)]
async fn run_tui(args: TuiArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(dir)?;

    run_search_view(client, args.query)
        .await
        .context("search view TUI failed")
}

/// Runs the `config init` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the file
/// cannot be written.
#[instrument(skip_all)]
fn run_config_init(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir).context("failed to resolve config path")?;
    if path.exists() {
        tracing::info!("Config already exists: {}", path.display());
        return Ok(());
    }

    let template = AppConfig {
        api: ApiConfig {
            api_key: Some(String::new()),
            base_url: None,
        },
    };
    template.save(&path).context("failed to write config")?;
    tracing::info!("Wrote {}", path.display());

    Ok(())
}

/// Runs the `config path` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved.
#[instrument(skip_all)]
fn run_config_path(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir).context("failed to resolve config path")?;
    tracing::info!("{}", path.display());

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => run_search(&args, cli.dir.as_ref()).await,
        Commands::Tui(args) => run_tui(args, cli.dir.as_ref()).await,
        Commands::Config(config) => match config.command {
            ConfigSubcommands::Init => run_config_init(cli.dir.as_ref()),
            ConfigSubcommands::Path => run_config_path(cli.dir.as_ref()),
        },
    }
}
