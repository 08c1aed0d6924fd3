//! Offset/limit pagination window shared by list queries.
//!
//! `limit` defaults to [`DEFAULT_LIMIT`] and is clamped to [`MAX_LIMIT`];
//! a zero limit is rejected rather than silently fixed.

use thiserror::Error;

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("limit must be greater than 0")]
    ZeroLimit,
}

/// Pagination window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// rows to skip
    pub offset: u64,
    /// max rows to return
    pub limit: u64,
}

impl Page {
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Result<Self, PaginationError> {
        let limit = match limit {
            Some(0) => return Err(PaginationError::ZeroLimit),
            Some(l) => l.min(MAX_LIMIT),
            None => DEFAULT_LIMIT,
        };
        Ok(Self { offset: offset.unwrap_or(0), limit })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { offset: 0, limit: DEFAULT_LIMIT }
    }
}
