//! The Business Logic Layer: rebuilds the games out of the Quake 3 events & computes the statistics on them

pub mod games;
pub mod aggregations;
pub mod cache;
pub mod api;

pub use bll_api::Config;
