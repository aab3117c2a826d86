//! Lazy, load-once asset cache

use std::sync::Arc;
use std::time::Instant;

use log::{error, info};
use tokio::sync::OnceCell;

use super::{AssetSource, Assets};
use crate::error::{Error, Result};

/// Owns the process-wide assets and loads them on first use
///
/// Concurrent first callers share one initialisation; once loaded the assets
/// are handed out as cheap `Arc` clones and never reloaded. A failed load
/// leaves the cache empty.
pub struct AssetLoader {
    source: Arc<dyn AssetSource>,
    assets: OnceCell<Arc<Assets>>,
}

impl AssetLoader {
    /// Create a loader over `source`; nothing is read until first use
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Create a loader over an already shared source
    #[must_use]
    pub fn from_shared(source: Arc<dyn AssetSource>) -> Self {
        Self {
            source,
            assets: OnceCell::new(),
        }
    }

    /// Load the assets if this has not happened yet and return them
    ///
    /// After the first success this is a cheap check with no I/O. Errors are
    /// configuration errors and are not cached.
    pub async fn ensure_loaded(&self) -> Result<Arc<Assets>> {
        let assets = self
            .assets
            .get_or_try_init(|| async {
                let source = Arc::clone(&self.source);
                let description = source.describe();
                let start = Instant::now();

                let loaded = match tokio::task::spawn_blocking(move || source.load()).await {
                    Ok(result) => result.map_err(|e| e.into_configuration("Loading model assets")),
                    Err(e) => Err(Error::configuration(format!(
                        "Asset loading task failed: {e}"
                    ))),
                };

                match loaded {
                    Ok(assets) => {
                        info!(
                            "Loaded {} in {:?}: {} encoder columns, {} classifier, scaler {}",
                            description,
                            start.elapsed(),
                            assets.encoders().len(),
                            assets.classifier().name(),
                            if assets.scaler().is_some() { "present" } else { "absent" }
                        );
                        Ok(Arc::new(assets))
                    }
                    Err(e) => {
                        error!("Failed to load {description}: {e}");
                        Err(e)
                    }
                }
            })
            .await?;
        Ok(Arc::clone(assets))
    }

    /// Loaded assets, without triggering a load
    #[must_use]
    pub fn get(&self) -> Option<Arc<Assets>> {
        self.assets.get().cloned()
    }

    /// Whether the assets have been loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.assets.initialized()
    }
}

impl std::fmt::Debug for AssetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetLoader")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
