//! CLI entry point - the composition root.
//!
//! Parses arguments, initialises logging and dispatches to handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use rigscan_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables before clap reads RIGSCAN_* fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config)?;

    match command {
        Commands::Games { json } => handlers::games::execute(&ctx, *json).await,
        Commands::Specs { json } => handlers::specs::execute(&ctx, *json).await,
        Commands::Launchers => handlers::launchers::execute(&ctx).await,
        Commands::Paths => handlers::paths::execute(&ctx),
    }
}
