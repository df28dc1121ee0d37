//! StoreDataSource port - where the storefront snapshot comes from.
//!
//! The host page owns the data; the concierge only reads a snapshot of it
//! once per session.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::storefront::StoreSnapshot;

/// Port for loading the read-only storefront snapshot.
///
/// Implementations must validate the payload and return
/// `ErrorCode::SnapshotInvalid` for malformed data and
/// `ErrorCode::SnapshotUnavailable` when the source cannot be read.
#[async_trait]
pub trait StoreDataSource: Send + Sync {
    async fn load(&self) -> Result<StoreSnapshot, DomainError>;
}
