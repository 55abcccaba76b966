//! Resting place for [Quake3LogStdinReader]


use crate::sync_reader::Quake3LogSyncReader;
use model::quake3_events::Quake3Events;
use dal_api::{Config, Quake3LogSource, Result};
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;

/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;

/// Name used to identify the standard input on error messages
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

/// [Quake3LogSource] implementation for reading Quake 3 Server events piped through the standard input
pub struct Quake3LogStdinReader {
    config: Arc<Config>,
}

impl Quake3LogStdinReader {

    pub fn new(config: Arc<Config>) -> Box<Self> {
        Box::new(Self {
            config,
        })
    }

}

impl Quake3LogSource for Quake3LogStdinReader {

    fn events_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Quake3Events>>>> {
        let reader = BufReader::with_capacity(BUFFER_SIZE, std::io::stdin());
        Quake3LogSyncReader::new(self.config, STDIN_SOURCE_NAME, reader)
            .events_stream()
    }

}
