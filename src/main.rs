//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use biz_dash::adapters::business::{HttpBusinessAdapter, MockBusinessAdapter};
use biz_dash::adapters::ui::tui::TuiInputPort;
use biz_dash::ports::{BusinessDataPort, InputPort};
use biz_dash::shared::config::AppConfig;
use biz_dash::usecases::SessionController;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // stderr keeps log lines out of the prompts; warn by default for the same reason
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    biz_dash::adapters::ui::init_ui();

    // --- Business data source ---
    let data: Arc<dyn BusinessDataPort> = if cfg.use_mock() {
        let delay_ms = cfg.mock_delay_ms_or_default();
        warn!(delay_ms, "BIZ_DASH_USE_MOCK set, serving mock business data");
        Arc::new(MockBusinessAdapter::with_delay(delay_ms))
    } else {
        let base_url = cfg.api_base_url_or_default();
        let timeout = cfg.request_timeout();
        info!(
            url = %base_url,
            timeout_secs = timeout.map(|t| t.as_secs()),
            "using business data service"
        );
        Arc::new(
            HttpBusinessAdapter::new(&base_url, timeout)
                .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    };

    // --- Services ---
    let policy = cfg.stale_response_policy();
    info!(?policy, "stale response policy");
    let session = Arc::new(SessionController::with_policy(data, policy));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(session));

    // --- Run (main menu -> Get Insights / Regenerate / Overview) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
