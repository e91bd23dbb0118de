use advisor_core::backend::http::HttpBackend;
use advisor_core::dashboard::{Dashboard, DashboardOptions};
use advisor_core::domain::Market;
use advisor_core::i18n::Language;
use advisor_core::orchestrator::Outcome;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod notify;
mod render;

#[derive(Debug, Parser)]
#[command(name = "advisor", about = "AI stock recommendations and 7-day predictions")]
struct Args {
    /// Display language. Defaults to the client locale.
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Backend base URL (overrides ADVISOR_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the current recommendations for a market.
    Recs {
        #[arg(long, default_value = "KR")]
        market: Market,
    },
    /// Predict the next 7 days for a ticker, with news sentiment.
    Predict { ticker: String },
    /// Start an optimization run and show the refreshed status.
    Optimize,
    /// Keep the dashboard mounted and log optimization status on every poll.
    Watch {
        #[arg(long, default_value = "KR")]
        market: Market,

        /// Stop after this many polls instead of waiting for Ctrl-C.
        #[arg(long)]
        ticks: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(api_url) = args.api_url {
        settings.api_url = Some(api_url);
    }

    let res = run(&settings, args.lang, args.command).await;
    if let Err(err) = &res {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %format!("{err:#}"), "advisor command failed");
    }
    res
}

async fn run(
    settings: &advisor_core::config::Settings,
    lang: Option<Language>,
    command: Command,
) -> anyhow::Result<()> {
    let backend = HttpBackend::from_settings(settings)?;
    tracing::debug!(base_url = backend.base_url(), "advisor backend");

    let mut options = DashboardOptions::from_settings(settings);
    if let Some(lang) = lang {
        options.language = lang;
    }
    if let Command::Recs { market } | Command::Watch { market, .. } = &command {
        options.market = *market;
    }

    let dashboard = Dashboard::new(Arc::new(backend), Arc::new(notify::StderrNotifier), options);

    match command {
        Command::Recs { .. } => {
            dashboard.mount().await;
            let state = dashboard.snapshot().await;
            dashboard.teardown().await;
            print!("{}", render::recommendations(&state));
        }
        Command::Predict { ticker } => {
            dashboard.set_ticker(&ticker).await;
            let outcome = dashboard.submit_ticker().await;
            let state = dashboard.snapshot().await;
            match outcome {
                Outcome::Applied => print!("{}", render::prediction(&state)),
                Outcome::Skipped => anyhow::bail!("ticker must be non-empty"),
                Outcome::Failed | Outcome::Superseded => {
                    anyhow::bail!("prediction for {} failed", state.ticker)
                }
            }
        }
        Command::Optimize => {
            let outcome = dashboard.start_optimization().await;
            anyhow::ensure!(outcome != Outcome::Failed, "optimization run was not accepted");
            let state = dashboard.snapshot().await;
            println!("{}", render::optimization_status(&state));
        }
        Command::Watch { ticks, .. } => watch(&dashboard, settings, ticks).await?,
    }

    Ok(())
}

async fn watch(
    dashboard: &Dashboard,
    settings: &advisor_core::config::Settings,
    ticks: Option<u64>,
) -> anyhow::Result<()> {
    dashboard.mount().await;
    print!("{}", render::recommendations(&dashboard.snapshot().await));

    let mut interval = tokio::time::interval(settings.poll_interval());
    let mut seen: u64 = 0;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = interval.tick() => {
                let state = dashboard.snapshot().await;
                tracing::info!(
                    market = %state.market,
                    status = %render::optimization_status(&state),
                    "optimization status"
                );
                seen += 1;
                if ticks.is_some_and(|n| seen >= n) {
                    break;
                }
            }
        }
    }

    dashboard.teardown().await;
    Ok(())
}

fn init_sentry(settings: &advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.require_sentry_dsn().ok()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
