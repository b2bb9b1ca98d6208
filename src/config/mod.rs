#[cfg(feature = "cli")]
pub mod cli;
pub mod site_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use site_config::{
    ContentConfig, ContentSource, RemoteConfig, SiteConfig, ENV_BACKEND_URL, ENV_CONTENT_SOURCE,
};
