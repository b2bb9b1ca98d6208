pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{build_provider, RemoteContentProvider, SiteContent, StaticContentProvider};
pub use app::{Page, PageState, Route, Site};
pub use config::SiteConfig;
pub use core::contact::ContactForm;
pub use domain::ports::ContentProvider;
pub use utils::error::{PortfolioError, Result};
