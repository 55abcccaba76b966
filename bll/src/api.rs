//! Resting place for [LogAnalysis], the [LogAnalysisApi] implementation


use crate::{
    aggregations,
    cache::GamesCache,
    games::collect_games,
    Config,
};
use bll_api::LogAnalysisApi;
use dal_api::{Quake3LogSource, Result};
use model::{
    game::Game,
    ordered_map::OrderedMap,
};
use std::sync::Arc;
use log::debug;


/// Answers the queries on Quake 3 logs, reading & parsing each log source only once -- while its cache entry lives
pub struct LogAnalysis {
    config: Arc<Config>,
    cache: GamesCache,
}

impl LogAnalysisApi for LogAnalysis {

    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self {
        let config = config.into();
        Self {
            cache: GamesCache::new(config.cache_ttl),
            config,
        }
    }

    fn games(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<Arc<Vec<Game>>> {
        self.cache.get_or_try_insert_with(source_id, || {
            debug!("Building the games for '{source_id}'");
            collect_games(Arc::clone(&self.config), log_dao())
        })
    }

    fn total_kills(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<u64> {
        self.games(source_id, log_dao)
            .map(|games| aggregations::total_kills(&games))
    }

    fn player_kills(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<OrderedMap<String, i64>> {
        self.games(source_id, log_dao)
            .map(|games| aggregations::player_kills(&games))
    }

    fn means_usage(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<OrderedMap<String, u64>> {
        self.games(source_id, log_dao)
            .map(|games| aggregations::kills_by_means(&games))
    }

    fn used_means_by_player(&self, source_id: &str, log_dao: impl FnOnce() -> Box<dyn Quake3LogSource>) -> Result<OrderedMap<String, OrderedMap<String, u64>>> {
        self.games(source_id, log_dao)
            .map(|games| aggregations::used_means_by_player(&games))
    }

    fn invalidate(&self, source_id: &str) {
        if self.cache.invalidate(source_id) {
            debug!("Forgot the games for '{source_id}'");
        }
    }

}


/// Unit tests for the [api](super) module, using the real DAL
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use dal::factory::instantiate_log_dao;
    use dal_api::LogSourceError;


    const EXCERPT_LOG_FILE_LOCATION: &str = "../dal/tests/resources/qgames_excerpt.log";


    #[test]
    fn queries() {
        let analysis = LogAnalysis::new(Config::default());
        assert_eq!(analysis.total_kills(EXCERPT_LOG_FILE_LOCATION, || log_dao(EXCERPT_LOG_FILE_LOCATION)).expect("total_kills() failed"), 14);
        assert_eq!(analysis.player_kills(EXCERPT_LOG_FILE_LOCATION, || log_dao(EXCERPT_LOG_FILE_LOCATION)).expect("player_kills() failed"),
                   OrderedMap::from([
                       ("Dono da Bola".to_owned(), 1),
                       ("Zeh".to_owned(), 1),
                       ("Isgalamido".to_owned(), -6),
                   ]));
        assert_eq!(analysis.means_usage(EXCERPT_LOG_FILE_LOCATION, || log_dao(EXCERPT_LOG_FILE_LOCATION)).expect("means_usage() failed"),
                   OrderedMap::from([
                       ("MOD_TRIGGER_HURT".to_owned(), 5),
                       ("MOD_ROCKET_SPLASH".to_owned(), 4),
                       ("MOD_RAILGUN".to_owned(), 2),
                       ("MOD_FALLING".to_owned(), 1),
                       ("MOD_ROCKET".to_owned(), 1),
                       ("MOD_UNKNOWN".to_owned(), 1),
                   ]));
        let used_means = analysis.used_means_by_player(EXCERPT_LOG_FILE_LOCATION, || log_dao(EXCERPT_LOG_FILE_LOCATION)).expect("used_means_by_player() failed");
        assert_eq!(used_means.get("Isgalamido"), Some(&OrderedMap::from([
            ("MOD_TRIGGER_HURT".to_owned(), 5),
            ("MOD_ROCKET_SPLASH".to_owned(), 4),
            ("MOD_FALLING".to_owned(), 1),
        ])));
        assert_eq!(used_means.get("Zeh"), Some(&OrderedMap::from([
            ("MOD_RAILGUN".to_owned(), 2),
            ("MOD_ROCKET".to_owned(), 1),
            ("MOD_UNKNOWN".to_owned(), 1),
        ])));
        assert_eq!(used_means.get("Dono da Bola"), used_means.get("Zeh"), "Players of the same game share its means");
        assert_eq!(used_means.get("Mocinha"), None, "Players without a score aren't credited with any means");
    }

    /// The log is read only once for all queries, until invalidated
    #[test]
    fn log_is_read_once() {
        let analysis = LogAnalysis::new(Config::default());
        let reads = Cell::new(0);
        let counting_log_dao = || {
            reads.set(reads.get() + 1);
            log_dao(EXCERPT_LOG_FILE_LOCATION)
        };
        analysis.total_kills("excerpt", counting_log_dao).expect("total_kills() failed");
        analysis.player_kills("excerpt", counting_log_dao).expect("player_kills() failed");
        analysis.means_usage("excerpt", counting_log_dao).expect("means_usage() failed");
        assert_eq!(reads.get(), 1, "The log should have been read just once");
        analysis.invalidate("excerpt");
        let games = analysis.games("excerpt", counting_log_dao).expect("games() failed");
        assert_eq!(reads.get(), 2, "Invalidation should force a new read");
        assert_eq!(games.len(), 3);
    }

    #[test]
    fn source_errors_are_propagated() {
        let analysis = LogAnalysis::new(Config::default());
        let result = analysis.total_kills("/tmp/non-existing.log", || log_dao("/tmp/non-existing.log"));
        assert!(matches!(result, Err(LogSourceError::NotFound { .. })), "Unexpected result: {result:?}");
        let result = analysis.player_kills("../dal/tests/resources/empty.log", || log_dao("../dal/tests/resources/empty.log"));
        assert!(matches!(result, Err(LogSourceError::InvalidInput { .. })), "Unexpected result: {result:?}");
    }


    fn log_dao(log_file_path: &str) -> Box<dyn Quake3LogSource> {
        instantiate_log_dao(Arc::new(dal_api::Config::default()), log_file_path)
    }

}
