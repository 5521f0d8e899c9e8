//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable, e.g. `RUST_LOG=magfield=debug`
/// to see per-tick cache statistics.
///
/// # Example
/// ```
/// magfield::core::logging::init();
/// log::info!("Field viewer started");
/// ```
pub fn init() {
    // A second call (tests, embedding) keeps the first logger.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init();
}
