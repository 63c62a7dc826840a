// crates/medimock-daemon/src/main.rs
//
// Binary entrypoint for the MediMock daemon.
//
// Parses CLI arguments, loads configuration, initializes tracing, and
// serves the mock API until Ctrl+C or SIGTERM.

mod config;

use clap::Parser;
use config::{ConfigOverrides, DaemonConfig};

use medimock_rpc::MockApiServer;

/// MediMock daemon — serves the mock verification API.
#[derive(Parser, Debug)]
#[command(name = "medimock-daemon", version, about = "MediMock API mock server")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "medimock.toml")]
    config: String,

    /// Host address to bind.
    #[arg(long, env = "MEDIMOCK_HOST")]
    host: Option<String>,

    /// Port to listen on.
    #[arg(long, env = "MEDIMOCK_PORT")]
    port: Option<u16>,

    /// Seed for reproducible /verify responses.
    #[arg(long, env = "MEDIMOCK_SEED")]
    seed: Option<u64>,

    /// Log level, used when RUST_LOG is unset.
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // The log level may come from the config file, so load it before the
    // subscriber exists and report the outcome afterwards.
    let loaded = DaemonConfig::load(&args.config);
    let mut daemon_config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => DaemonConfig::default(),
    };
    daemon_config.apply(args.overrides());

    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&daemon_config.log_level)),
        )
        .init();

    match loaded {
        Ok(_) => tracing::info!("Loaded configuration from {}", args.config),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            args.config,
            e
        ),
    }

    let server = MockApiServer::new(daemon_config.rpc_config());

    tracing::info!("MediMock daemon v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Bind address: {}", server.config().bind_addr());
    match daemon_config.seed {
        Some(seed) => tracing::info!("Deterministic responses with seed {}", seed),
        None => tracing::info!("Randomized responses"),
    }

    server.start().await?;

    Ok(())
}
