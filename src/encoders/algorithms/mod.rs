pub mod chunked;
pub mod errors;
pub mod wide;

// Re-export error types for public API
pub use errors::DecodeError;
