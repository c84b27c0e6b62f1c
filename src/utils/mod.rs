//! Shared helpers for identifier checks and colon-separated tag values.

pub mod validation;
