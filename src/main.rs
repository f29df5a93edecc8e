use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiwi_estimator::models::*;
use kiwi_estimator::settings::Settings;
use kiwi_estimator::{api, cli, store::SessionStore};

#[derive(Parser)]
#[command(name = "kiwi")]
#[command(about = "Kiwifruit flowers-per-cane and revenue estimator")]
struct Cli {
    /// Secrets file holding `[auth] password`
    #[arg(long, global = true)]
    secrets: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the estimator HTTP server
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Flowers per cane needed to hit a target yield
    Flowers {
        #[command(flatten)]
        access: AccessArgs,

        #[arg(long, default_value_t = DEFAULT_NUM_TREES)]
        num_trees: u32,

        #[arg(long, default_value_t = DEFAULT_LAND_SIZE_HA)]
        land_size_ha: f64,

        /// Target yield in tons per hectare
        #[arg(long, default_value_t = DEFAULT_TARGET_YIELD_T_PER_HA)]
        target_yield: f64,

        /// Average fruit weight in grams
        #[arg(long, default_value_t = DEFAULT_FRUIT_WEIGHT_G)]
        fruit_weight: f64,
    },
    /// Estimated yield and revenue for a flowers-per-cane figure
    Revenue {
        #[command(flatten)]
        access: AccessArgs,

        #[arg(long, default_value_t = DEFAULT_NUM_TREES)]
        num_trees: u32,

        #[arg(long, default_value_t = DEFAULT_FLOWERS_PER_CANE)]
        flowers_per_cane: f64,

        /// Average fruit price per kg
        #[arg(long, default_value_t = DEFAULT_AVG_PRICE_PER_KG)]
        price_per_kg: f64,

        /// Average fruit weight in grams
        #[arg(long, default_value_t = DEFAULT_FRUIT_WEIGHT_G)]
        fruit_weight: f64,
    },
}

#[derive(Args)]
struct AccessArgs {
    #[arg(long, default_value = "")]
    password: String,

    /// Acknowledge the disclaimer before estimating
    #[arg(long)]
    accept_disclaimer: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "kiwi_estimator=debug,tower_http=debug".into()),
    );

    // stderr keeps stdout clean for estimate output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(settings: Settings, host: &str, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting kiwi estimator on {}:{}", host, port);

    let state = api::AppState::new(&settings);
    spawn_session_sweeper(state.sessions.clone());
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Kiwi estimator listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn spawn_session_sweeper(sessions: SessionStore) {
    let period = sessions.ttl().clamp(Duration::from_secs(1), Duration::from_secs(60));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let purged = sessions.purge_expired();
            if purged > 0 {
                tracing::debug!("Purged {} idle sessions", purged);
            }
        }
    });
}

fn run_estimate(
    settings: &Settings,
    access: AccessArgs,
    request: EstimateRequest,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    cli::run_estimate(
        settings,
        &access.password,
        access.accept_disclaimer,
        request,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let settings = Settings::load(cli.secrets.as_deref())?;

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(settings, &host, port).await?,
        Some(Commands::Flowers {
            access,
            num_trees,
            land_size_ha,
            target_yield,
            fruit_weight,
        }) => {
            let input = FlowersPerCaneInput {
                num_trees,
                land_size_ha,
                target_yield_t_per_ha: target_yield,
                fruit_weight_g: fruit_weight,
            };
            run_estimate(&settings, access, EstimateRequest::FlowersPerCane(input))?;
        }
        Some(Commands::Revenue {
            access,
            num_trees,
            flowers_per_cane,
            price_per_kg,
            fruit_weight,
        }) => {
            let input = RevenueInput {
                num_trees,
                flowers_per_cane,
                avg_price_per_kg: price_per_kg,
                fruit_weight_g: fruit_weight,
            };
            run_estimate(&settings, access, EstimateRequest::Revenue(input))?;
        }
        None => serve(settings, "127.0.0.1", 3000).await?,
    }

    Ok(())
}
