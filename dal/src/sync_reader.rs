//! Resting place for [Quake3LogSyncReader]


use crate::events_translation::translate_classified_line;
use model::quake3_events::Quake3Events;
use dal_api::{Config, LogSourceError, Quake3LogSource, Result};
use quake3_server_log::deserializer::{classify_log_line, ClassifiedLine};
use std::{
    io::Read,
    pin::Pin,
    sync::Arc,
};
use futures::{Stream, stream, StreamExt};
use log::trace;


/// [Quake3LogSource] implementation for reading Quake 3 Server events from anything implementing [Read]
/// -- in-memory buffers (through `std::io::Cursor`), files, pipes...
pub struct Quake3LogSyncReader<Reader: Read> {
    config: Arc<Config>,
    source_name: String,
    reader: Reader,
}

impl<Reader: Read> Quake3LogSyncReader<Reader> {

    /// `source_name` identifies the source on error messages
    pub fn new(config: Arc<Config>, source_name: &str, reader: Reader) -> Box<Self> {
        Box::new(Self {
            config,
            source_name: source_name.into(),
            reader,
        })
    }

}

impl<Reader: Read> Quake3LogSource for Quake3LogSyncReader<Reader> {

    fn events_stream(mut self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Quake3Events>>>> {
        let mut contents = String::new();
        self.reader.read_to_string(&mut contents)
            .map_err(|read_err| LogSourceError::from_io(&self.source_name, read_err))?;
        if contents.trim().is_empty() {
            return Err(LogSourceError::InvalidInput { locator: self.source_name })
        }

        let debug = self.config.debug;
        let source_name = self.source_name;
        let stream = stream::iter(ClassifiedLines::new(contents))
            .inspect(move |(line_number, classified_line)| if debug && !classified_line.is_recognized() {
                trace!("'{source_name}': skipping line {line_number}");
            })
            .flat_map(|(line_number, classified_line)| stream::iter(translate_classified_line(line_number, classified_line)));
        let stream: Pin<Box<dyn Stream<Item=Quake3Events>>> = if debug {
            Box::pin(stream
                .inspect(|yielded_event| trace!("{yielded_event:?}")))
        } else {
            Box::pin(stream)
        };
        Ok(stream)
    }

}


/// Iterator over the lines of an owned log text, yielding `(line_number, classified_line)`.\
/// Lines end in `\r\n` or in any single [is_line_break()] char; line numbers start at 1.
struct ClassifiedLines {
    contents: String,
    offset: usize,
    line_number: u32,
}

impl ClassifiedLines {

    fn new(contents: String) -> Self {
        Self {
            contents,
            offset: 0,
            line_number: 0,
        }
    }

}

impl Iterator for ClassifiedLines {
    type Item = (u32, ClassifiedLine);

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.contents.get(self.offset..)
            .filter(|remaining| !remaining.is_empty())?;
        let (line, consumed) = match remaining.char_indices().find(|(_, c)| is_line_break(*c)) {
            Some((end, '\r')) if remaining[end+1..].starts_with('\n') => (&remaining[..end], end + 2),
            Some((end, line_break)) => (&remaining[..end], end + line_break.len_utf8()),
            None => (remaining, remaining.len()),
        };
        let classified_line = classify_log_line(line);
        self.offset += consumed;
        self.line_number += 1;
        Some((self.line_number, classified_line))
    }
}

/// Line terminators: `\n`, a lone `\r` (old Mac logs) and the other Unicode line & paragraph separators
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

// for integrated unit tests, see sync_file_reader.rs
// (the tests were delegated there as it is easier to test from files)
