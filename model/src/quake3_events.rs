//! Resting place for [Quake3Events]


/// Maps the Quake3 server events we care about, in close relation to `quake3_server_log::deserializer::ClassifiedLine`.\
/// Every variant has an `event_id` -- the line number, starting from 1, of the source log line.
///
/// IMPLEMENTATION NOTE: Notice this enum carries almost the same data as the `quake3-server-log` crate types.
/// Nonetheless, both should exist (regardless of the repetitiveness) for the following reasons:
///   1) `quake3-server-log` represents an external library, crafted for a different purpose than our business entities
///      -- having this model here decouples the application from the external library;
///   2) a single log line may carry both a game boundary and a kill: here they are 2 sequential events.
#[derive(Debug, Clone, PartialEq)]
pub enum Quake3Events {
    /// A new game match has started
    InitGame { event_id: u32 },
    /// `killer_name` killed `victim_name` -- `killer_name` may be [crate::game::WORLD] for environmental deaths
    Kill {
        event_id:       u32,
        /// ids & code are kept as the digits written in the log
        killer_id:      String,
        victim_id:      String,
        means_code:     String,
        killer_name:    String,
        victim_name:    String,
        /// The symbolic name for `means_code`, as in `MOD_ROCKET_SPLASH`
        means_of_death: &'static str,
    },
}

impl Quake3Events {

    /// Returns the `event_id` for the source Quake3 event
    pub fn event_id(&self) -> u32 {
        match self {
            Quake3Events::InitGame { event_id, .. } |
            Quake3Events::Kill     { event_id, .. } => *event_id
        }
    }

}
