//
// ──────────────────────────────────────────────────────────
// Port (durable key-value snapshot storage)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage error: {0}")]
    Backend(String),
}

/// One JSON document per key. Implementations are synchronous and cheap;
/// callers treat every failure as recoverable (a missing read reseeds from
/// defaults, a failed write leaves in-memory state authoritative).
pub trait SnapshotStore: Send + Sync {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, SnapshotStoreError>;

    fn save_raw(&self, key: &str, bytes: &[u8]) -> Result<(), SnapshotStoreError>;
}

/// Snapshot key for the home page aggregate.
pub const HOME_PAGE_KEY: &str = "home_page_data";

/// Snapshot key for the portfolio aggregate.
pub const PORTFOLIO_KEY: &str = "portfolio_data";
