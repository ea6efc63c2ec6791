/*
 * Error Module
 *
 * Crate-wide error type. The simulation kernel has very few failure modes:
 * indexing a vector component that does not exist, and building a
 * population from parameters that cannot describe a valid body.
 * Everything else (empty flocks, no obstacles, out-of-bounds clicks) is
 * normal control flow and never reported as an error.
 */

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A vector component index outside {0, 1, 2}.
    #[error("vector index {index} out of range (expected 0, 1 or 2)")]
    IndexOutOfRange { index: usize },

    /// Invalid construction parameter (non-positive mass, radius, ...).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
