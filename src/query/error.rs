use thiserror::Error;

/// Reasons a raw query string can't be turned into a `ProductQuery`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid unsigned integer for {key}: {value:?}")]
    InvalidInteger { key: String, value: String },
    #[error("minPrice ({min}) is greater than maxPrice ({max})")]
    PriceRange { min: u32, max: u32 },
    #[error("Expected only one query value for: {0}")]
    DuplicateKey(String),
    #[error("Invalid ddr: {0:?}")]
    InvalidDdr(String),
}
