use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use marchsync::catalog::{load_catalog_from_file, Catalog};
use marchsync::config::Config;
use marchsync::error::MsResult;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Hero catalog JSON. The built-in cavalry roster is used when omitted.
    #[arg(global = true, long)]
    catalog: Option<String>,

    /// JSON config file; explicit command-line values win over it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pair the selected heroes into marches as close to the target speed as possible.
    Optimize(cmd::optimize::OptimizeArgs),
    /// Resolve a single main + deputy march.
    March(cmd::march::MarchArgs),
    /// List the talent speeds a hero can reach.
    Talents(cmd::talents::TalentsArgs),
    /// List the heroes in the catalog.
    Heroes(cmd::heroes::HeroesArgs),
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> MsResult<Config> {
    let config = match path {
        Some(p) => {
            info!("⚖️  Loading config from: {}", p);
            let mut base = Config::load_from_file(p)?;
            if let Some(m) = sub_matches {
                base.merge_from_cli(cli_config, m);
            }
            base
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing March Sync...");

    let catalog = match &cli.catalog {
        Some(path) => load_catalog_from_file(path),
        None => Ok(Catalog::builtin()),
    }
    .unwrap_or_else(|e| {
        error!("❌ Failed to load catalog: {}", e);
        process::exit(1);
    });
    info!(
        "📚 Catalog v{}: {} heroes",
        catalog.version(),
        catalog.hero_count()
    );
    let catalog = Arc::new(catalog);

    let outcome = match &cli.command {
        Commands::Optimize(args) => resolve_config(
            cli.config.as_deref(),
            &args.config,
            matches.subcommand_matches("optimize"),
        )
        .and_then(|config| cmd::optimize::run(args, config, catalog)),
        Commands::March(args) => resolve_config(
            cli.config.as_deref(),
            &args.config,
            matches.subcommand_matches("march"),
        )
        .and_then(|config| cmd::march::run(args, config, &catalog)),
        Commands::Talents(args) => cmd::talents::run(args, &catalog),
        Commands::Heroes(args) => cmd::heroes::run(args, &catalog),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
