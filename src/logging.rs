use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Configured level, or `info` when it does not name one.
pub fn fallback_level(level: &str) -> LevelFilter {
    level.trim().parse::<LevelFilter>().unwrap_or(LevelFilter::INFO)
}

/// `RUST_LOG` wins; otherwise the configured level, then `info`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(fallback_level(level).into()))
}

/// Installs a stderr subscriber. Safe to call more than once.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init("debug");
        init("warn");
        tracing::info!("still logging");
    }

    #[test]
    fn configured_level_is_parsed() {
        assert_eq!(fallback_level("loud"), LevelFilter::INFO);
        assert_eq!(fallback_level("verbose"), LevelFilter::INFO);
        assert_eq!(fallback_level(" debug "), LevelFilter::DEBUG);
        assert_eq!(fallback_level("WARN"), LevelFilter::WARN);
    }

    #[test]
    fn unknown_level_falls_back() {
        // Only the fallback path is exercised when RUST_LOG is unset.
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filter("loud").max_level_hint(), Some(LevelFilter::INFO));
            assert_eq!(filter(" DEBUG ").max_level_hint(), Some(LevelFilter::DEBUG));
        }
    }
}
