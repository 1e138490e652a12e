pub mod config;
pub mod debounce;
pub mod error;
pub mod presenter;
pub mod reporter;
pub mod session;
pub mod source;

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use training_core::TrainingQueue;

use crate::config::Config;
use crate::presenter::ConsolePresenter;
use crate::reporter::HttpReporter;
use crate::session::{run_training, SessionSummary};
use crate::source::CardSource;

/// Grace period for in-flight progress reports on exit.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

/// Run the queue, then give in-flight reports up to `grace` to land.
///
/// The flush happens whether or not the run failed.
pub async fn train<I, W>(
    queue: TrainingQueue,
    input: I,
    presenter: &mut ConsolePresenter<W>,
    reporter: &HttpReporter,
    grace: Duration,
) -> error::Result<SessionSummary>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let outcome = run_training(queue, input, presenter, reporter).await;
    reporter.flush(grace).await;
    outcome
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;

    tracing::info!(page = %config.page_url, "Loading cards...");
    let cards = CardSource::from_config(&config).load().await?;
    let queue = TrainingQueue::new(cards)?;
    tracing::info!(cards = queue.len(), "Starting training");

    let reporter = HttpReporter::new(&config)?;
    let mut presenter = ConsolePresenter::new(std::io::stdout());
    let input = BufReader::new(tokio::io::stdin());

    let summary = train(queue, input, &mut presenter, &reporter, SHUTDOWN_GRACE).await?;
    presenter.show_summary(&summary);

    Ok(())
}
