use std::sync::Once;

/// How the `env_logger` backend is set up.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter in `env_logger` syntax, e.g. `"parallax_engine=debug,wgpu=warn"`.
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info` with
/// the chatty GPU crates held at `warn`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // A test harness or host may already own the global logger.
        if builder(config).try_init().is_err() {
            eprintln!("parallax: a global logger was already installed");
        }
        log::debug!("logging initialized");
    });
}

fn builder(config: LoggingConfig) -> env_logger::Builder {
    let mut b = env_logger::Builder::new();
    match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
        Some(filter) => {
            b.parse_filters(&filter);
        }
        None => {
            b.filter_level(log::LevelFilter::Info);
            for noisy in ["wgpu_core", "wgpu_hal", "naga"] {
                b.filter_module(noisy, log::LevelFilter::Warn);
            }
        }
    }
    b.write_style(config.write_style);
    b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let logger = builder(LoggingConfig::with_filter("warn")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn module_filter_raises_max_level() {
        let logger = builder(LoggingConfig::with_filter("error,parallax_engine=trace")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Trace);
    }
}
