mod cli;
mod replay;

use finboard_common::{ConfigError, FinboardError, Result};
use finboard_config::schema::FinboardConfig;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> std::result::Result<FinboardConfig, ConfigError> {
    match &args.config {
        Some(path) => finboard_config::load_config_from(path),
        None => finboard_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("Ignoring invalid log directive {directive:?}: {e}");
            filter
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: cli::Args, config: FinboardConfig) -> Result<()> {
    let mut workspace = replay::seed_workspace(&config);
    tracing::info!("Canvas ready ({} panels)", workspace.canvas().len());

    if let Some(path) = &args.script {
        let script = replay::load_script(path)?;
        replay::replay(&mut workspace, script);
    }

    let report = replay::report(&mut workspace, args.events);
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| FinboardError::Other(format!("failed to serialize layout: {e}")))?;
    println!("{json}");
    Ok(())
}

fn main() {
    let args = cli::parse();

    // The config picks the default log level, so it loads before the
    // subscriber exists. Failures are reported once logging is up.
    let loaded = load_config(&args);
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_owned(),
        (None, Err(_)) => "finboard=info".to_owned(),
    };
    init_logging(&directive);

    tracing::info!("Finboard v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FinboardConfig::default()
    });

    if let Err(e) = run(args, config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
