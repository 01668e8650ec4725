use log::LevelFilter;

/// Initialise logging to stderr at `level`.
///
/// `RUST_LOG` takes precedence when set.
pub fn setup_logger(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
