//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[catalog]");
    ctx.output.kv("latency_ms", &config.catalog.latency_ms.to_string());
    ctx.output.kv("simulate_failure", &config.catalog.simulate_failure.to_string());

    ctx.output.info("[filters]");
    ctx.output.kv("price_ceiling", &config.filters.price_ceiling().display());
    ctx.output.kv("category_mode", config.filters.category_mode.as_str());

    ctx.output.info("[checkout]");
    ctx.output.kv("tax_rate_percent", &config.checkout.tax_rate().percent().to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level);
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use crate::output::Output;

    #[tokio::test]
    async fn test_init_writes_then_refuses() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, Output::new(false, true)).unwrap();
        let init = |force| ConfigArgs {
            command: ConfigCommand::Init { force },
        };

        run(init(false), &ctx).await.unwrap();
        let written = StorefrontConfig::load(&dir.path().join("storefront.toml")).unwrap();
        assert_eq!(written, StorefrontConfig::default());

        let err = run(init(false), &ctx).await.unwrap_err();
        assert!(err.to_string().contains("--force"));
        run(init(true), &ctx).await.unwrap();
    }
}
