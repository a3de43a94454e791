//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_core::cart::TaxRate;
use storefront_core::catalog::MockCatalog;
use storefront_core::search::{FilterSpec, SelectionMode};

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Loaded configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading `config_path` or the nearest config file.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, config_path, output)
    }

    /// Like [`Context::load`] but starting the search from `cwd`.
    pub fn load_from(cwd: &Path, config_path: Option<&Path>, output: Output) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => (StorefrontConfig::load(path)?, Some(path.to_path_buf())),
            None => match find_config_file(cwd) {
                Some(path) => (StorefrontConfig::load(&path)?, Some(path)),
                None => (StorefrontConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd: cwd.to_path_buf(),
        })
    }

    /// The catalog accessor, with latency and failure mode from config.
    pub fn catalog_source(&self) -> MockCatalog {
        MockCatalog::seeded()
            .with_latency(self.config.catalog.latency())
            .with_failure(self.config.catalog.simulate_failure)
    }

    /// Filter spec every listing starts from.
    pub fn base_filter(&self) -> FilterSpec {
        FilterSpec::new().with_price_ceiling(self.config.filters.price_ceiling())
    }

    pub fn category_mode(&self) -> SelectionMode {
        self.config.filters.category_mode
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.config.checkout.tax_rate()
    }
}

/// Find the nearest config file walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use storefront_core::Money;

    fn quiet() -> Output {
        Output::new(false, true)
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();
        assert!(ctx.config_path.is_none());
        assert_eq!(ctx.tax_rate(), TaxRate::DEFAULT);
        assert!(ctx.base_filter().is_unrestricted());
    }

    #[test]
    fn test_finds_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".storefront.toml"),
            "[filters]\nprice_ceiling = 50.0\ncategory_mode = \"multi\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_from(&nested, None, quiet()).unwrap();
        assert_eq!(
            ctx.config_path.as_deref(),
            Some(dir.path().join(".storefront.toml").as_path())
        );
        assert_eq!(ctx.base_filter().price_ceiling, Money::usd(5000));
        assert_eq!(ctx.category_mode(), SelectionMode::Multi);
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("storefront.toml"), "[catalog]\nlatency_ms = 5\n").unwrap();
        let explicit = dir.path().join("other.json");
        std::fs::write(&explicit, r#"{"catalog": {"latency_ms": 0}}"#).unwrap();

        let ctx = Context::load_from(dir.path(), Some(explicit.as_path()), quiet()).unwrap();
        assert_eq!(ctx.config.catalog.latency(), Duration::ZERO);
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("storefront.toml"), "[catalog\n").unwrap();
        assert!(Context::load_from(dir.path(), None, quiet()).is_err());
    }

    #[tokio::test]
    async fn test_simulated_failure_reaches_source() {
        use storefront_core::catalog::CatalogSource;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("storefront.toml"),
            "[catalog]\nlatency_ms = 0\nsimulate_failure = true\n",
        )
        .unwrap();
        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();
        assert!(ctx.catalog_source().all_products().await.is_err());
    }
}
