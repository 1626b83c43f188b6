// API-facing error types
pub mod records;

// Re-exports for convenience
pub use records::{ApiError, ErrorResponse};

#[cfg(test)]
mod records_test;
