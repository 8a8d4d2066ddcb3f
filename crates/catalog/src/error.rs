//! Error types produced by the catalog crate.
//!
//! The record model itself is infallible; errors only surface at the edges
//! where untrusted data enters: reading a catalog file, decoding its JSON, and
//! validating the decoded records or a caller-supplied range pair.
//!
//! | Error | Category | Description |
//! |-------|----------|-------------|
//! | [`Read`](CatalogError::Read) | I/O | Catalog file could not be read |
//! | [`Parse`](CatalogError::Parse) | Decoding | Catalog JSON is malformed |
//! | [`InvalidRecord`](CatalogError::InvalidRecord) | Validation | A record violates the data model |
//! | [`InvalidRange`](CatalogError::InvalidRange) | Validation | `min > max` or a NaN bound |
use thiserror::Error;

/// Errors raised while loading or validating catalog data.
///
/// ```rust
/// use catalog::CatalogError;
///
/// let err = CatalogError::InvalidRecord {
///     index: 3,
///     reason: "wine_name empty".to_string(),
/// };
/// assert_eq!(err.to_string(), "invalid record at index 3: wine_name empty");
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    /// The catalog is not a JSON array of records.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A decoded record violates the data model.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// A range pair is inverted or contains a NaN bound.
    #[error("invalid range: {0}")]
    InvalidRange(String),
}
