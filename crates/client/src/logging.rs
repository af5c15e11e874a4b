use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Human-readable logs on stderr, plus daily-rotated JSON files when
/// `log_dir` is set. Filtering follows `RUST_LOG`.
pub fn init_logging(log_dir: Option<&str>) {
    let file_layer = log_dir.map(|dir| {
        fmt::layer()
            .with_writer(rolling::daily(dir, "examdesk.log"))
            .with_ansi(false)
            .json()
    });

    // stdout is reserved for command output
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
}
