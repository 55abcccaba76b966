//! Line classifier for Quake 3 server log files.
//!
//! Only two kinds of lines matter for the analysis:
//!  1) Game boundaries: any line containing `InitGame:` -- simple substring search;
//!  2) Kill events, in the fixed form `<MIN>:<SEC> Kill: <KILLER_ID> <VICTIM_ID> <MEANS_CODE>: <KILLER> killed <VICTIM> by <WEAPON>`
//!     -- parsed with a single precompiled Regex, as names are free text (spaces included) delimited only by the
//!     literal ` killed ` and ` by ` words.
//!
//! Anything else is not an error: callers are expected to skip unrecognized lines.
//! See also the `benches/parsing_strategies.rs` for the trade-offs between Regex & `str::split*()` on `Kill` lines.

use regex::Regex;
use once_cell::sync::Lazy;
use crate::means_of_death::MeansOfDeath;


/// Marker for the start of a new game match
pub const INIT_GAME_MARKER: &str = "InitGame:";

static KILL_PARSING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*\d+:\d+\sKill:\s(?P<killer_id>\d+)\s(?P<victim_id>\d+)\s(?P<means_code>\d+):\s(?P<killer_name>.+)\skilled\s(?P<victim_name>.+)\sby\s(?P<weapon>.+)$"#)
        .expect("KILL_PARSING_REGEX compilation failed")
});


/// Data extracted from a `Kill` log line.\
/// The numeric fields are kept as the digits found in the log: they are identifiers, never arithmetic operands,
/// so a `Kill` with ids too large for any integer type still counts.
#[derive(Debug, Clone, PartialEq)]
pub struct KillEvent {
    pub killer_id:   String,
    pub victim_id:   String,
    /// The means of death code digits -- see [Self::means_of_death()]
    pub means_code:  String,
    /// `<world>` for environmental deaths
    pub killer_name: String,
    pub victim_name: String,
    /// The textual weapon token at the end of the line, as written by the server
    pub weapon:      String,
}

impl KillEvent {

    /// The cause of death, as resolved from [Self::means_code]
    pub fn means_of_death(&self) -> MeansOfDeath {
        MeansOfDeath::from_code_text(&self.means_code)
    }

}

/// The result of inspecting a single log line
#[derive(Debug, Default, PartialEq)]
pub struct ClassifiedLine {
    /// The line marks the start of a new game
    pub starts_game: bool,
    /// The line is a well formed `Kill` event
    pub kill: Option<KillEvent>,
}

impl ClassifiedLine {

    /// Returns false if the line should be ignored
    pub fn is_recognized(&self) -> bool {
        self.starts_game || self.kill.is_some()
    }

}

#[derive(Debug, PartialEq)]
pub enum KillParsingError {
    /// The line doesn't follow the `Kill` grammar -- most likely, it is another event
    UnrecognizedLineFormat,
}

/// Tells if `log_line` starts a new game match
pub fn is_game_boundary(log_line: &str) -> bool {
    log_line.contains(INIT_GAME_MARKER)
}

/// Extracts the [KillEvent] out of `log_line`, failing if the line isn't a well formed `Kill` event
pub fn deserialize_kill(log_line: &str) -> Result<KillEvent, KillParsingError> {
    let captures = KILL_PARSING_REGEX.captures(log_line)
        .ok_or(KillParsingError::UnrecognizedLineFormat)?;
    let field = |name| captures.name(name)
        .map(|capture| capture.as_str())
        .unwrap_or_default();
    Ok(KillEvent {
        killer_id:   field("killer_id").to_string(),
        victim_id:   field("victim_id").to_string(),
        means_code:  field("means_code").to_string(),
        killer_name: field("killer_name").to_string(),
        victim_name: field("victim_name").to_string(),
        weapon:      field("weapon").to_string(),
    })
}

/// Inspects `log_line` for both a game boundary and a `Kill` event.\
/// Both are checked on every line: a malformed `Kill` is simply reported as `kill: None`.
pub fn classify_log_line(log_line: &str) -> ClassifiedLine {
    ClassifiedLine {
        starts_game: is_game_boundary(log_line),
        kill:        deserialize_kill(log_line).ok(),
    }
}
