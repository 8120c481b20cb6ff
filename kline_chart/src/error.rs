use market_data_client::{ErrorKind, ProviderError};
use thiserror::Error;

/// Problems found in a bar series after it was fetched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid series at bar {index}: {reason}")]
    InvalidInput { index: usize, reason: String },

    #[error("need at least 2 bars to summarize, got {len}")]
    InsufficientData { len: usize },
}

/// Everything that can end a fetch in the error state.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Rejected before anything was sent.
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Source(#[from] ProviderError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl FetchFailure {
    /// Coarse classification, mirroring [`ProviderError::kind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchFailure::InvalidRequest(_) => ErrorKind::InvalidRequest,
            FetchFailure::Source(e) => e.kind(),
            FetchFailure::Chart(_) => ErrorKind::Domain,
        }
    }
}
