use anyhow::Result;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Log to stderr so the dashboard output on stdout stays clean. Default is
/// WARN; RUST_LOG overrides.
pub fn init() -> Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env()?,
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
