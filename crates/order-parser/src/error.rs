use thiserror::Error;

pub type Result<T, E = CatalogError> = core::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("empty entry in {0} vocabulary")]
    EmptyEntry(&'static str),
    #[error("duplicate entry in {vocabulary} vocabulary: {entry}")]
    Duplicate {
        vocabulary: &'static str,
        entry: String,
    },
    #[error("shot count must be a digit string: {0}")]
    InvalidShotCount(String),
    #[error("menu has no items")]
    NoItems,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    #[error("order has no items to price")]
    NoItems,
    #[error("invalid base price range: {min}..{max}")]
    InvalidRange { min: f64, max: f64 },
    #[error("price for {0} must be finite and non-negative")]
    InvalidPrice(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}
