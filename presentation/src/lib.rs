//! Small crate to be a central point for presentation requisites.
//!
//! Shows the games as a human readable report or as Json -- as well as the Json bodies of the statistics queries

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::Write;
use common::types::Result;
use log::debug;
use model::{
    game::Game,
    ordered_map::OrderedMap,
};


/// Writes the human readable report of `games`: for each game, its kills, its ranking & the means of death used
pub fn to_report(games: &[Game], mut writer: impl Write) -> Result<()> {

    let mut write = |text: &str|
        writer.write_all(text.as_bytes())
            .map_err(|err| format!("presentation: to_report(): Error writing the report to the given `writer`: {err}"));

    debug!("Reporting {} games", games.len());
    for (game_index, game) in games.iter().enumerate() {
        if game_index > 0 {
            write("\n")?;
        }
        write(&format!("game_{}:\n", game_index + 1))?;
        write(&format!("  total_kills: {}\n", game.total_kills))?;
        write(&format!("  players: {}\n", serialize_set(&game.players)))?;
        write("  kills: {\n")?;
        for (player, kills) in game.kills.iter() {
            write(&format!("    \"{player}\": {kills},\n"))?;
        }
        write("  }\n")?;

        write("  Ranking:\n")?;
        for (rank, (player, kills)) in bll::aggregations::ranking(game).into_iter().enumerate() {
            write(&format!("    {}. {player} - {kills} kills\n", rank + 1))?;
        }

        write("\n  Kills by means:\n")?;
        for (means_of_death, count) in game.kills_by_means.iter() {
            write(&format!("    {means_of_death}: {count}\n"))?;
        }
    }
    Ok(())
}

/// Writes `games` as `{"games": [...]}`, each game with its `total_kills`, `players`, `kills` & `kills_by_means`.\
/// IMPLEMENTATION NOTE: here we use our hand-crafted json instead of the one provided by the serde-json crate so we can better control the formatting
///                      -- maps keep the order in which keys were discovered -- and gain a bit of performance
pub fn to_json(games: &[Game], mut writer: impl Write) -> Result<()> {

    let mut write = |text: &str|
        writer.write_all(text.as_bytes())
            .map_err(|err| format!("presentation: to_json(): Error writing `Game` to the given `writer`: {err}"));

    write("{\n  \"games\": [")?;
    for (game_index, game) in games.iter().enumerate() {
        if game_index > 0 {
            write(",")?;
        }
        write("\n    {\n")?;
        write(&format!("      \"total_kills\": {},\n", game.total_kills))?;
        write(&format!("      \"players\": {},\n", serialize_set(&game.players)))?;
        write(&format!("      \"kills\": {},\n", serialize_map("      ", &game.kills)))?;
        write(&format!("      \"kills_by_means\": {}\n", serialize_map("      ", &game.kills_by_means)))?;
        write("    }")?;
    }
    if !games.is_empty() {
        write("\n  ")?;
    }
    write("]\n}")?;
    Ok(())
}

/// `{"total_kills": N}`
pub fn total_kills_json(total_kills: u64) -> String {
    format!("{{\"total_kills\": {total_kills}}}")
}

/// `{"player_kills": {"player": kills, ...}}`, keeping the order of `player_kills`
pub fn player_kills_json(player_kills: &OrderedMap<String, i64>) -> String {
    format!("{{\n  \"player_kills\": {}\n}}", serialize_map("  ", player_kills))
}

/// `{"means_usage": {"MOD_...": count, ...}}`, keeping the order of `means_usage`
pub fn means_usage_json(means_usage: &OrderedMap<String, u64>) -> String {
    format!("{{\n  \"means_usage\": {}\n}}", serialize_map("  ", means_usage))
}

/// `{"used_means_by_player": {"player": {"MOD_...": count, ...}, ...}}`
pub fn used_means_by_player_json(used_means_by_player: &OrderedMap<String, OrderedMap<String, u64>>) -> String {
    let players = used_means_by_player.iter()
        .map(|(player, used_means)| format!("    \"{}\": {}", escape(player), serialize_map("    ", used_means)))
        .collect::<Vec<_>>();
    if players.is_empty() {
        String::from("{\n  \"used_means_by_player\": {}\n}")
    } else {
        format!("{{\n  \"used_means_by_player\": {{\n{}\n  }}\n}}", players.join(",\n"))
    }
}

fn serialize_set(set: &BTreeSet<String>) -> String {
    let mut string = set.iter()
        .fold(String::from("["), |mut acc, element| {
            if acc.len() != 1 {
                acc.push_str(", ");
            }
            acc.push('"');
            acc.push_str(&escape(element));
            acc.push('"');
            acc
        });
    string.push(']');
    string
}

/// Serializes `map` with one entry per line, indented by `pre_ident` + 2 spaces
fn serialize_map<T: Display>(pre_ident: &str, map: &OrderedMap<String, T>) -> String {
    if map.is_empty() {
        return String::from("{}")
    }
    let mut string = map.iter()
        .fold(String::from("{"), |mut acc, (key, value)| {
            if acc.len() != 1 {
                acc.push(',');
            }
            acc.push_str("\n  ");
            acc.push_str(pre_ident);
            acc.push_str(&format!("\"{}\": {value}", escape(key)));
            acc
        });
    string.push('\n');
    string.push_str(pre_ident);
    string.push('}');
    string
}

/// Player names come straight from the log, so quotes, backslashes & control chars must be escaped
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"'  => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
