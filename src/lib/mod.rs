//! Shared library modules providing error types, path safety helpers, and telemetry initialization.

pub mod errors;
pub mod fs;
pub mod names;
pub mod paths;
pub mod telemetry;
