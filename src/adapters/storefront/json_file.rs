//! Snapshot source reading the host page's JSON payload from disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::storefront::StoreSnapshot;
use crate::ports::StoreDataSource;

/// Loads a [`StoreSnapshot`] from a camelCase JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotSource {
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StoreDataSource for JsonFileSnapshotSource {
    async fn load(&self) -> Result<StoreSnapshot, DomainError> {
        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::SnapshotUnavailable,
                format!("Cannot read snapshot: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        let snapshot = StoreSnapshot::from_json(&json).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "snapshot rejected");
            DomainError::new(ErrorCode::SnapshotInvalid, e.to_string())
                .with_detail("field", e.field().to_string())
        })?;

        info!(
            path = %self.path.display(),
            products = snapshot.featured_products.len(),
            collections = snapshot.collections.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}
