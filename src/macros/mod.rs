//! Helper macros.

#[macro_use]
mod tracing;
