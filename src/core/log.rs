use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "tokswap";

/// Per-target levels for a `-v` count: none is silent, `-v` shows swap and
/// feed debug events, `-vv` adds tracing from this crate and debug output
/// from the HTTP stack.
pub fn log_targets(verbosity: u8) -> Targets {
    match verbosity {
        0 => Targets::new().with_target(APP_TARGET, LevelFilter::OFF),
        1 => Targets::new().with_target(APP_TARGET, LevelFilter::DEBUG),
        _ => Targets::new()
            .with_target(APP_TARGET, LevelFilter::TRACE)
            .with_default(LevelFilter::DEBUG),
    }
}

/// Installs the global subscriber on stderr. A set `RUST_LOG` replaces the
/// verbosity flag entirely.
pub fn init_logging(verbosity: u8) {
    let registry = tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr));

    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => registry.with(env_filter).init(),
        Err(_) => registry.with(log_targets(verbosity)).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_quiet_by_default() {
        let targets = log_targets(0);
        assert!(!targets.would_enable("tokswap::core::controller", &Level::ERROR));
        assert!(!targets.would_enable("reqwest::connect", &Level::ERROR));
    }

    #[test]
    fn test_single_verbose_flag_covers_this_crate_only() {
        let targets = log_targets(1);
        assert!(targets.would_enable("tokswap::core::controller", &Level::DEBUG));
        assert!(!targets.would_enable("tokswap::providers::switcheo", &Level::TRACE));
        assert!(!targets.would_enable("hyper_util::client", &Level::DEBUG));
    }

    #[test]
    fn test_repeated_verbose_flag_includes_dependencies() {
        let targets = log_targets(3);
        assert!(targets.would_enable("tokswap::providers::switcheo", &Level::TRACE));
        assert!(targets.would_enable("hyper_util::client", &Level::DEBUG));
        assert!(!targets.would_enable("hyper_util::client", &Level::TRACE));
    }
}
