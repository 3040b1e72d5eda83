use thiserror::Error;

/// Unified error type for the impulse-blocker core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Two conditions are deliberately absent: a transition or
/// deletion naming an unknown item id is a silent no-op (stale UI actions
/// are expected and benign), and corrupt persisted state is recovered by
/// substituting an empty watchlist rather than surfacing an error.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input validation ────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── Key-value store I/O ─────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}
