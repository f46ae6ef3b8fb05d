use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use aegis_backend::api::{self, ApiContext};
use aegis_backend::config::{self, Config};
use aegis_backend::gemini::GeminiClient;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(model = %config.model, "Using Gemini model");

    let model = Arc::new(GeminiClient::from_config(&config));
    let ctx = ApiContext::new(model);

    if let Err(e) = api::serve(ctx, config.addr).await {
        tracing::error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
