//! Resting place for [Quake3LogFileSyncReader]


use crate::sync_reader::Quake3LogSyncReader;
use model::quake3_events::Quake3Events;
use dal_api::{Config, LogSourceError, Quake3LogSource, Result};
use std::fs::File;
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;
use log::debug;


/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;


/// [Quake3LogSource] implementation for reading Quake 3 Server events from a log file
pub struct Quake3LogFileSyncReader {
    config: Arc<Config>,
    log_file_path: String,
}

impl Quake3LogFileSyncReader {

    pub fn new<IntoString: Into<String>>(config: Arc<Config>, log_file_path: IntoString) -> Box<Self> {
        Box::new(Self {
            config,
            log_file_path: log_file_path.into(),
        })
    }

}

impl Quake3LogSource for Quake3LogFileSyncReader {

    fn events_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Quake3Events>>>> {
        let file = File::open(&self.log_file_path)
            .map_err(|err| LogSourceError::from_io(&self.log_file_path, err))?;
        debug!("Reading Quake3 Server log file '{}'", self.log_file_path);
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);
        Quake3LogSyncReader::new(self.config, &self.log_file_path, reader)
            .events_stream()
    }

}


/// Unit tests the [sync_file_reader](super) implementation of [dal_api::Quake3LogSource]
#[cfg(test)]
mod tests {
    use super::*;


    /// The location of a good log file, with 3 games and a few lines to be skipped
    const GOOD_LOG_FILE_LOCATION: &str = "tests/resources/qgames_excerpt.log";
    const CRLF_LOG_FILE_LOCATION: &str = "tests/resources/crlf.log";
    const EMPTY_LOG_FILE_LOCATION: &str = "tests/resources/empty.log";
    const WHITESPACE_LOG_FILE_LOCATION: &str = "tests/resources/whitespace.log";
    const PROSE_LOG_FILE_LOCATION: &str = "tests/resources/prose.log";
    const NON_EXISTING_FILE_LOCATION: &str = "/tmp/non-existing.log";


    /// Tests that an existing & valid file (for which there will be no IO errors) may be correctly read from beginning to end
    #[test]
    fn read_file() {
        let events = read_events(GOOD_LOG_FILE_LOCATION);
        let init_games_count = events.iter()
            .filter(|event| matches!(event, Quake3Events::InitGame { .. }))
            .count();
        let kills_count = events.iter()
            .filter(|event| matches!(event, Quake3Events::Kill { .. }))
            .count();
        assert_eq!(init_games_count, 3, "Unexpected number of `InitGame` events");
        assert_eq!(kills_count, 15, "Unexpected number of `Kill` events");
        assert_eq!(events.first().map(Quake3Events::event_id), Some(1), "The `Kill` before the first `InitGame` should still be yielded by the DAL");
        assert_eq!(events.last(), Some(&Quake3Events::Kill {
            event_id: 43,
            killer_id: "1022".to_owned(),
            victim_id: "4".to_owned(),
            means_code: "99".to_owned(),
            killer_name: "<world>".to_owned(),
            victim_name: "Zeh".to_owned(),
            means_of_death: "MOD_UNKNOWN",
        }), "The malformed `Kill` on line 44 should have been skipped");
    }

    /// Windows line endings must not leak into the names
    #[test]
    fn crlf_line_endings() {
        let events = read_events(CRLF_LOG_FILE_LOCATION);
        assert_eq!(events, vec![
            Quake3Events::InitGame { event_id: 1 },
            Quake3Events::Kill {
                event_id: 2,
                killer_id: "2".to_owned(),
                victim_id: "3".to_owned(),
                means_code: "7".to_owned(),
                killer_name: "Isgalamido".to_owned(),
                victim_name: "Dono da Bola".to_owned(),
                means_of_death: "MOD_ROCKET_SPLASH",
            },
        ]);
    }

    /// Tests that files with no recognizable lines simply yield no events
    #[test]
    fn prose_file() {
        let events = read_events(PROSE_LOG_FILE_LOCATION);
        assert!(events.is_empty(), "No events were expected, but got {events:?}");
    }

    /// Tests that opening a non-existing file yields the expected error result & message
    #[test]
    fn non_existing_file() {
        let expected_err = "The Quake3 Server log '/tmp/non-existing.log' does not exist";
        let log_dao = Quake3LogFileSyncReader::new(config(), NON_EXISTING_FILE_LOCATION);
        match log_dao.events_stream() {
            Ok(_stream) => panic!("Opening a non-existing file was expected to fail at `Stream` creation, but the operation succeeded"),
            Err(stream_creation_err) => {
                assert!(matches!(stream_creation_err, LogSourceError::NotFound { .. }), "Unexpected error variant: {stream_creation_err:?}");
                assert_eq!(stream_creation_err.to_string(), expected_err.to_string(), "Unexpected `Stream` creation error");
            },
        }
    }

    /// Tests that empty files -- or files with just whitespaces -- are refused before any parsing
    #[test]
    fn empty_files() {
        for log_file_path in [EMPTY_LOG_FILE_LOCATION, WHITESPACE_LOG_FILE_LOCATION] {
            let log_dao = Quake3LogFileSyncReader::new(config(), log_file_path);
            match log_dao.events_stream() {
                Ok(_stream) => panic!("Opening the empty file '{log_file_path}' was expected to fail at `Stream` creation, but the operation succeeded"),
                Err(stream_creation_err) => {
                    assert!(matches!(stream_creation_err, LogSourceError::InvalidInput { .. }), "Unexpected error variant: {stream_creation_err:?}");
                    assert_eq!(stream_creation_err.to_string(), format!("The Quake3 Server log '{log_file_path}' is empty"), "Unexpected `Stream` creation error");
                },
            }
        }
    }

    /// Tests that other IO errors are wrapped -- reading a directory, for instance
    #[test]
    fn io_failure() {
        let log_dao = Quake3LogFileSyncReader::new(config(), "tests/resources");
        match log_dao.events_stream() {
            Ok(_stream) => panic!("Reading a directory was expected to fail at `Stream` creation, but the operation succeeded"),
            Err(stream_creation_err) => assert!(matches!(stream_creation_err, LogSourceError::IoFailure { .. }), "Unexpected error variant: {stream_creation_err:?}"),
        }
    }


    fn read_events(log_file_path: &str) -> Vec<Quake3Events> {
        let log_dao = Quake3LogFileSyncReader::new(config(), log_file_path);
        let stream = log_dao.events_stream().expect("Couldn't create the `Stream`");
        futures::executor::block_on_stream(stream).collect()
    }

    fn config() -> Arc<Config> {
        Arc::new(Config {
            debug: true,
            ..Config::default()
        })
    }

}
