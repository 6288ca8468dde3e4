use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the store and the IO layer.
///
/// `Validation` is surfaced to the user at the point of entry and blocks the
/// mutation. `NotFound` marks a race between stale UI state and the store;
/// callers handle it silently. The remaining variants wrap serialization and
/// file failures. Stale references inside a project are not errors at all —
/// those surface as reverted drag outcomes.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required field: {0}")]
    Validation(&'static str),

    #[error("unknown project {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF export failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("no data directory available on this platform")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, Error>;
