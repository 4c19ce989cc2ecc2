use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a compact logger on stderr.
///
/// Bots must not log to stdout, since that is where the judge expects their
/// answer.
pub fn initialize_logging(level: LevelFilter) {
    initialize_logging_to(level, std::io::stderr);
}

/// Like [`initialize_logging()`], but with a custom destination.
pub fn initialize_logging_to<W>(level: LevelFilter, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(writer),
        )
        .with(filter)
        .init();
}
