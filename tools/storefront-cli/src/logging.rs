//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Default directives when `RUST_LOG` is unset.
fn default_directives(level: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { level };
    format!("storefront_cli={level},storefront_core={level}")
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// listing output or JSON on stdout.
pub fn init(config: &LoggingConfig, verbose: bool, json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(&config.level, verbose).into());

    let as_json = json || config.format == LogFormat::Json;
    let json_layer = as_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!as_json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives("info", false),
            "storefront_cli=info,storefront_core=info"
        );
        assert_eq!(
            default_directives("warn", true),
            "storefront_cli=debug,storefront_core=debug"
        );
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = LoggingConfig::default();
        init(&config, false, false);
        init(&config, true, true);
    }
}
