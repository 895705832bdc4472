//! integration-secrets: HTTP service that issues fresh integration secrets.

mod config;
mod secret;
mod server;
mod telemetry;

use config::ServiceConfig;

fn main() -> anyhow::Result<()> {
    // Determine config path
    let config_path = {
        let args: Vec<String> = std::env::args().collect();
        // Check for --config flag first
        args.iter()
            .position(|a| a == "--config")
            .and_then(|i| args.get(i + 1).cloned())
            // Fall back to positional arg
            .or_else(|| args.get(1).filter(|a| !a.starts_with('-')).cloned())
            .or_else(|| std::env::var("INTEGRATION_SECRETS_CONFIG").ok())
            .unwrap_or_else(|| "integration-secrets.toml".to_string())
    };

    // Load configuration
    let config = ServiceConfig::load(&config_path)?;

    // Build the tokio runtime — the request path never blocks, so a
    // single reactor thread serves it
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        telemetry::init(&config.log.level);

        tracing::info!(
            config_path = %config_path,
            listen_address = %config.server.listen_address,
            "Starting integration-secrets"
        );

        server::run(config).await
    })
}
