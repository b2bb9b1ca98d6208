// Adapters layer: concrete content sources behind the `ContentProvider` port.

pub mod http;
pub mod static_store;

use crate::config::{ContentSource, SiteConfig};
use crate::domain::ports::ContentProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::sync::Arc;

pub use http::RemoteContentProvider;
pub use static_store::{SiteContent, StaticContentProvider};

/// Picks the content source once, at startup. A remote source without a
/// backend URL is a configuration error, never a silent fallback.
pub fn build_provider(
    config: &SiteConfig,
    content: Arc<SiteContent>,
) -> Result<Arc<dyn ContentProvider>> {
    match config.content.source {
        ContentSource::Static => {
            tracing::info!("serving built-in content");
            Ok(Arc::new(StaticContentProvider::new(content)))
        }
        ContentSource::Remote => {
            let backend_url = validate_required_field("remote.backend_url", &config.remote.backend_url)?;
            tracing::info!("serving content from {}", backend_url);
            let provider = RemoteContentProvider::new(
                backend_url,
                config.remote.timeout(),
                config.remote.retry_policy(),
            )?;
            Ok(Arc::new(provider))
        }
    }
}
