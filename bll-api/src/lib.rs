//! Contracts for the Business Logic Layer: the queries the outer layers (CLI, HTTP handlers...) may perform on Quake 3 logs

mod config;
pub use config::*;

use std::sync::Arc;
use dal_api::{Quake3LogSource, Result};
use model::{
    game::Game,
    ordered_map::OrderedMap,
};


/// The operations offered on a Quake 3 log, each one mirroring an API endpoint.\
/// Every query takes the `source_id` -- identifying the log for caching purposes -- and a `log_dao` factory,
/// which is only called if the games for `source_id` are not available in the cache.
pub trait LogAnalysisApi {

    /// Creates a new instance
    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self;

    /// The games reconstructed from the log
    fn games(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<Arc<Vec<Game>>>;

    /// Sum of the kills of all games
    fn total_kills(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<u64>;

    /// The players' scores summed up across all games, greatest first
    fn player_kills(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<OrderedMap<String, i64>>;

    /// How many kills each means of death caused across all games, greatest first
    fn means_usage(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<OrderedMap<String, u64>>;

    /// For each player, the means of death of the games they scored in, greatest first
    fn used_means_by_player(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<OrderedMap<String, OrderedMap<String, u64>>>;

    /// Forgets the cached games for `source_id`, so the next query reads the log again
    fn invalidate(&self, source_id: &str);

}
