//! Resting place for DAL's [Config] & friends

/// Configuration for the DAL crate
#[derive(Debug)]
pub struct Config {

    /// The implementation to use when getting a Data Access Object (DAO) instance
    pub quake3_log_source_implementation: Quake3LogSourceImplementations,

    /// If true, `log::trace!` every event yielded by the DAO -- as well as the `Kill`-looking lines that were skipped
    pub debug: bool,

}

/// The available sources for Quake 3 server logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quake3LogSourceImplementations {
    /// Reads the whole log file at the given path
    SyncLogFileReader,
    /// Reads the whole log from the standard input -- the locator is just used for identification
    StdinReader,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quake3_log_source_implementation: Quake3LogSourceImplementations::SyncLogFileReader,
            debug: false,
        }
    }
}
