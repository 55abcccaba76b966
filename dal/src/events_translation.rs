//! Contains utilities for translating the outputs of the `quake3-server-log`
//! library into our simplified models for the events we care about

use model::quake3_events::Quake3Events;
use quake3_server_log::deserializer::{ClassifiedLine, KillEvent};


/// Translates the `classified_line` found at `line_number` into 0, 1 or 2 of our [Quake3Events]:
/// when a line both starts a game and carries a kill, the `InitGame` comes first -- so the kill counts for the new game.
pub fn translate_classified_line(line_number: u32, classified_line: ClassifiedLine) -> impl Iterator<Item=Quake3Events> {
    let ClassifiedLine { starts_game, kill } = classified_line;
    starts_game
        .then_some(Quake3Events::InitGame { event_id: line_number })
        .into_iter()
        .chain(kill.map(|kill| translate_kill(line_number, kill)))
}

fn translate_kill(line_number: u32, kill: KillEvent) -> Quake3Events {
    let means_of_death = kill.means_of_death().name();
    let KillEvent { killer_id, victim_id, means_code, killer_name, victim_name, .. } = kill;
    Quake3Events::Kill {
        event_id: line_number,
        killer_id,
        victim_id,
        means_code,
        killer_name,
        victim_name,
        means_of_death,
    }
}
