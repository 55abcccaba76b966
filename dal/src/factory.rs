//! Factory for obtaining one of the implementations of our DAO objects

use std::sync::Arc;
use dal_api::{Config, Quake3LogSource, Quake3LogSourceImplementations};
use crate::{
    stdin_reader::Quake3LogStdinReader,
    sync_file_reader::Quake3LogFileSyncReader,
};


/// Instantiates a Data Access Object (dao) able to work on the contents of `log_locator`,
/// pointing to a Quake3 server log, from which a [Quake3LogSource] is returned.\
/// For the [Quake3LogSourceImplementations::StdinReader], `log_locator` is ignored.
pub fn instantiate_log_dao(config: Arc<Config>, log_locator: &str) -> Box<dyn Quake3LogSource> {
    match config.quake3_log_source_implementation {
        Quake3LogSourceImplementations::SyncLogFileReader => Quake3LogFileSyncReader::new(config, log_locator),
        Quake3LogSourceImplementations::StdinReader       => Quake3LogStdinReader::new(config),
    }
}
