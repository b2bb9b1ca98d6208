use anyhow::Context;
use clap::Parser;
use portfolio_site::app::render;
use portfolio_site::app::ROUTE_PATTERNS;
use portfolio_site::utils::logger;
use portfolio_site::{build_provider, CliConfig, Page, Route, Site, SiteContent};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.routes {
        for pattern in ROUTE_PATTERNS {
            println!("{}", pattern);
        }
        return Ok(());
    }

    let config = match cli.site_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::debug!("site config: {:?}", config);

    let content = Arc::new(SiteContent::builtin().context("built-in site content is invalid")?);
    let provider = build_provider(&config, content.clone())?;
    let site = Site::new(content, provider);

    if cli.health {
        match site.provider().health().await {
            Ok(health) => {
                println!("✅ {} ({})", health.status, health.service);
                return Ok(());
            }
            Err(e) => {
                tracing::error!("health check failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(2);
            }
        }
    }

    let route = Route::parse(&cli.path);
    if let Some(pending) = route.as_ref().and_then(Page::loading) {
        eprint!("{}", pending);
    }
    let page = site.load(&cli.path, &cli.category).await;
    println!("{}", render::render_page(&page, site.navigation(), route.as_ref()));

    Ok(())
}
