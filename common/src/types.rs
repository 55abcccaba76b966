//! Contains some types used for domain agnostic glue code -- presentation & application

use std::result;


/// For operations whose failures are only reported to the user, never inspected
pub type Result<T> = result::Result<T, Box<dyn std::error::Error>>;
