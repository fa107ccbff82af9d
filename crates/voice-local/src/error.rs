use std::time::Duration;
use thiserror::Error;

/// Why a listen attempt produced no utterance
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListenError {
    /// Audio was captured but could not be transcribed
    #[error("speech not understood")]
    NotUnderstood,
    /// The recognition backend could not be reached
    #[error("speech backend unreachable: {0}")]
    BackendUnreachable(String),
    #[error("no speech within {0:?}")]
    Timeout(Duration),
    /// The input source is gone and will produce no more utterances
    #[error("speech input closed")]
    Closed,
}

impl ListenError {
    /// Whether another listen attempt may succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ListenError::Closed)
    }
}
