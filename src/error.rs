//! Error types for the simulation core.
//!
//! Geometry that cannot produce a usable contact normal is not an error: the
//! pair is skipped for the frame. Only caller-facing inputs (handles, rays,
//! kick parameters, config files) and explicit vector division report
//! failures here.

use thiserror::Error;

/// Unified error type for physics operations.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// A vector or scalar quantity was divided by exactly zero.
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// Where the division happened
        context: &'static str,
    },
    /// A direction or normal of zero length was supplied.
    #[error("zero-length vector in {context}")]
    ZeroLengthVector {
        /// Where the vector was rejected
        context: &'static str,
    },
    /// A direction with NaN or infinite components (or length) was supplied.
    #[error("non-finite vector in {context}")]
    NonFiniteVector {
        /// Where the vector was rejected
        context: &'static str,
    },
    /// A scalar argument is non-finite or outside its allowed range.
    #[error("invalid {name}: {value}")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// Body handle does not refer to a body in the world.
    #[error("body index {index} out of range (count={count})")]
    InvalidBodyHandle {
        /// The index that was looked up
        index: usize,
        /// Number of bodies in the world
        count: usize,
    },
    /// Configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// I/O error while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Config could not be parsed.
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PhysicsError>;
