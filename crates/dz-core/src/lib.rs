//! # dz-core
//!
//! Core types and error definitions for the dochadzka workspace.
//!
//! This crate provides the building blocks shared across all other crates in
//! the workspace: primitive aliases, the error hierarchy, and the tolerant
//! string parsers used for month keys, day keys, and clock times.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Tolerant parsers for keys and wall-clock times.
pub mod parsers;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for hours and money.
pub type Real = f64;

/// A money amount in the document currency (EUR).
pub type Amount = Real;

/// An elapsed time expressed in hours.
pub type Hours = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
