#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod error;
pub mod magnitude;

pub use error::MagnitudeError;
pub use magnitude::Magnitude;
