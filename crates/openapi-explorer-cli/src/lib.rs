//! OpenAPI explorer CLI library.
//!
//! This crate provides the output formatting used by the `openapi-explorer`
//! binary, kept separate from argument parsing so it can be unit tested.

pub mod output;
