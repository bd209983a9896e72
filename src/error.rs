// src/error.rs

use thiserror::Error;

/// Problems with the starting inventory or run settings.
/// These are detected before any order is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("starting inventory has no products")]
    EmptyInventory,

    #[error("product '{0}' appears more than once in the starting inventory")]
    DuplicateProduct(String),

    #[error("product identifier must not be empty")]
    EmptyProductId,

    #[error("max quantity per line must be at least 1")]
    InvalidMaxQuantity,

    #[error("at least one order stream is required")]
    NoStreams,

    #[error("failed to read inventory file: {0}")]
    Csv(#[from] csv::Error),
}

/// A malformed order handed to the allocator.
/// The order is rejected as a whole and nothing is recorded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("product '{0}' is not in the catalog")]
    UnknownProduct(String),

    #[error("quantity for product '{0}' must be positive")]
    NonPositiveQuantity(String),

    #[error("product '{0}' appears more than once in the order")]
    DuplicateProduct(String),
}
