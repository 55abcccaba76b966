//! Resting place for [Game] & friends

use std::collections::BTreeSet;
use crate::ordered_map::OrderedMap;


/// The killer name Quake 3 uses for environmental deaths (falling, lava, trigger hurt...).\
/// It is never tracked as a player.
pub const WORLD: &str = "<world>";

/// Everything we know about a single game match, from its `InitGame` up to the next one (or to the end of the log)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    /// Number of recognized kill events, regardless of who got the frag
    pub total_kills: u32,
    /// Names of everyone that killed (except [WORLD]) or died in this game
    pub players: BTreeSet<String>,
    /// Frag score for each player, in the order they were first seen scoring (or losing) a frag.\
    /// Suicides and deaths by [WORLD] take one frag from the victim, so scores may be negative.
    pub kills: OrderedMap<String, i32>,
    /// How many kills each means of death caused, in the order they were first seen
    pub kills_by_means: OrderedMap<String, u32>,
}

impl Game {

    /// Creates an empty game, with all counters zeroed
    pub fn new() -> Self {
        Self::default()
    }

}
