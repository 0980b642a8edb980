use clap::{Parser, Subcommand};
use ow_agent::run_telegram_test;
use ow_core::{HttpClientFactory, Notifier, Settings};
use ow_web::{create_app, AppState};
use std::net::SocketAddr;
use tracing::{error, info, warn};

mod config;
mod duration;
mod logging;

use config::ConfigArgs;
use duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Crude oil news alerts for Telegram", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP endpoints and the manual trigger page
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
        bind: SocketAddr,
    },
    /// Run one fetch → classify → notify pass and print the summary
    Check,
    /// Send the fixed test message to verify bot credentials
    TestTelegram,
    /// Run a pass every interval (e.g. 30m, 1h15m)
    Watch {
        #[arg(long, default_value = "15m")]
        interval: HumanDuration,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();
    let cli = Cli::parse();

    let settings = Settings::from(cli.config);
    let http = HttpClientFactory::create()?;
    let state = AppState::from_settings(&settings, http);

    if settings.news.api_key.is_none() {
        info!("📭 NEWS_API_KEY not set, the demo article will be used");
    }
    if !state.notifier.is_configured() {
        warn!("⚠️ TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set, alerts cannot be sent");
    }

    match cli.command {
        Commands::Serve { bind } => {
            if state.cron_secret.is_none() {
                warn!("⚠️ CRON_SECRET not set, /cron will reject every request");
            }
            let listener = tokio::net::TcpListener::bind(bind).await?;
            info!("🚀 Listening on {}", listener.local_addr()?);
            axum::serve(listener, create_app(state)).await?;
        }
        Commands::Check => {
            let summary = state.manager.run().await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::TestTelegram => {
            let report = run_telegram_test(state.notifier.as_ref()).await;
            if !report.is_success() {
                anyhow::bail!("{}", report.message());
            }
            println!("✅ {}", report.message());
        }
        Commands::Watch { interval } => {
            info!("Running in periodic mode with {}s interval", interval.0.as_secs());
            loop {
                match state.manager.run().await {
                    Ok(summary) => info!(
                        "✨ Pass finished: {} fetched, {} high-intensity, sent={}",
                        summary.news_count, summary.high_intensity_count, summary.sent
                    ),
                    Err(e) => error!("Pass failed: {}", e),
                }
                info!("Waiting {}s before next pass", interval.0.as_secs());
                tokio::time::sleep(interval.0).await;
            }
        }
    }

    Ok(())
}
