use crate::config::{ContentSource, SiteConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Render portfolio site pages from built-in or remote content")]
pub struct CliConfig {
    /// Route to render, e.g. "/portfolio" or "/project/3"
    #[arg(default_value = "/")]
    pub path: String,

    /// Category filter for the portfolio page
    #[arg(long, default_value = "all")]
    pub category: String,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Content source: static or remote
    #[arg(long)]
    pub source: Option<ContentSource>,

    #[arg(long)]
    pub backend_url: Option<String>,

    #[arg(long, help = "List the route table and exit")]
    pub routes: bool,

    #[arg(long, help = "Check the content source and exit")]
    pub health: bool,

    #[arg(long, help = "Emit JSON logs")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// File, then environment, then flags; validated last so a flag can
    /// supply what the environment is missing.
    pub fn site_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_with(self.config.as_deref(), |config| {
            if let Some(source) = self.source {
                config.content.source = source;
            }
            if let Some(url) = &self.backend_url {
                config.remote.backend_url = Some(url.clone());
            }
        })
    }
}
