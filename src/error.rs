use thiserror::Error;

/// Errors reported by the fallible [`ScanMap`](crate::ScanMap) operations.
///
/// Both conditions are local and recoverable. Removal never reports either:
/// it silently no-ops on a missing or absent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanMapError {
    /// The operation requires a concrete key, but `None` was supplied.
    #[error("key must be present, got none")]
    NullKey,
    /// No valid entry has a key equal to the one requested.
    #[error("key not found")]
    KeyNotFound,
}
