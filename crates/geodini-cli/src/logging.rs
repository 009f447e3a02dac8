use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr subscriber once; later calls are no-ops.
pub fn init_logging(verbosity: u8) -> Result<(), ParseError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_new(level_for(verbosity).to_string())?
            .add_directive("hyper_util=warn".parse()?)
            .add_directive("reqwest=warn".parse()?);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        Ok::<(), ParseError>(())
    })?;
    Ok(())
}
