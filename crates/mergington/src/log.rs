pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Installs `color_eyre` panic and error reports, then a global
/// `tracing_subscriber::fmt` subscriber filtered by `RUST_LOG`.
///
/// An unset `RUST_LIB_BACKTRACE` becomes `1`, and an unset `RUST_LOG`
/// becomes `tracing=info,tower_http=debug,mergington_backend=debug`.
/// Fails if either reporter is already installed.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    // Get / set backtrace
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(LogError::ColorEyre)?;

    // Get/set the log level
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var(
                "RUST_LOG",
                "tracing=info,tower_http=debug,mergington_backend=debug",
            )
        }
    }

    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
