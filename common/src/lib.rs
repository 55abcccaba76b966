//! Utilities shared by the application crates

pub mod types;
