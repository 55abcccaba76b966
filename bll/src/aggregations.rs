//! Cross-game statistics & per game rankings, computed over the [Game]s built by [crate::games]

use model::{
    game::Game,
    ordered_map::OrderedMap,
};


/// Sum of the kills of all `games`
pub fn total_kills(games: &[Game]) -> u64 {
    games.iter()
        .map(|game| game.total_kills as u64)
        .sum()
}

/// Sums each player's score across all `games`, sorted by the score, greatest first.\
/// Ties keep the order in which players were first seen.
pub fn player_kills(games: &[Game]) -> OrderedMap<String, i64> {
    let mut player_kills = OrderedMap::new();
    for game in games {
        for (player, kills) in game.kills.iter() {
            *player_kills.get_or_default_mut(player.as_str()) += *kills as i64;
        }
    }
    player_kills.sorted_by_value_desc()
}

/// Sums the usage of each means of death across all `games`, sorted by usage, greatest first
pub fn kills_by_means(games: &[Game]) -> OrderedMap<String, u64> {
    let mut means_usage = OrderedMap::new();
    for game in games {
        for (means_of_death, count) in game.kills_by_means.iter() {
            *means_usage.get_or_default_mut(means_of_death.as_str()) += *count as u64;
        }
    }
    means_usage.sorted_by_value_desc()
}

/// The means of death "used" by each player, with their counts sorted greatest first.\
/// NOTE: every player scored in a game is credited with all the means of death of that game,
/// not just the ones they used -- a log doesn't tell which player used which weapon on world kills & suicides,
/// so this is the attribution consumers of this statistic have always seen.
pub fn used_means_by_player(games: &[Game]) -> OrderedMap<String, OrderedMap<String, u64>> {
    let mut used_means: OrderedMap<String, OrderedMap<String, u64>> = OrderedMap::new();
    for game in games {
        for player in game.kills.keys() {
            let player_means = used_means.get_or_default_mut(player.as_str());
            for (means_of_death, count) in game.kills_by_means.iter() {
                *player_means.get_or_default_mut(means_of_death.as_str()) += *count as u64;
            }
        }
    }
    used_means.into_iter()
        .map(|(player, player_means)| (player, player_means.sorted_by_value_desc()))
        .collect()
}

/// The ranking of a single `game`: players with a non-negative score, greatest first.\
/// Ties keep the order of `game.kills`.
pub fn ranking(game: &Game) -> Vec<(&str, i32)> {
    let mut ranking: Vec<(&str, i32)> = game.kills.iter()
        .filter(|(_, kills)| **kills >= 0)
        .map(|(player, kills)| (player.as_str(), *kills))
        .collect();
    ranking.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranking
}
