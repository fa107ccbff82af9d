use crate::DialogueState;
use order_parser::{ParserError, PricingError};
use thiserror::Error;

pub type Result<T, E = SessionError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("speech input closed while {0}")]
    InputClosed(DialogueState),
    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),
    #[error("parser setup failed: {0}")]
    Parser(#[from] ParserError),
}
