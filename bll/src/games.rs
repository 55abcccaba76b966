//! Builds the [Game]s out of the Quake 3 events, applying the kill attribution rules

use model::{
    game::{Game, WORLD},
    quake3_events::Quake3Events,
};
use std::future;
use std::sync::Arc;
use futures::{Stream, stream, StreamExt};
use dal_api::{Quake3LogSource, Result};
use log::{debug, warn};
use crate::Config;


/// State machine reconstructing the game sessions: either there is no active game (initially)
/// or there is a `current` one, receiving the kills until the next `InitGame` or the end of the events.
pub struct GameSessionBuilder {
    config: Arc<Config>,
    current: Option<Game>,
}

impl GameSessionBuilder {

    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Processes the next `event`, returning the game it completed, if any
    pub fn feed(&mut self, event: Quake3Events) -> Option<Game> {
        match event {

            Quake3Events::InitGame { event_id } => {
                debug!("Event #{event_id}: new game");
                self.current.replace(Game::new())
            },

            Quake3Events::Kill { event_id, killer_name, victim_name, means_of_death, .. } => {
                match self.current {
                    Some(ref mut game) => record_kill(game, &killer_name, &victim_name, means_of_death),
                    None => if self.config.log_issues {
                        warn!("Event #{event_id}: dropping `Kill` of {victim_name:?} by {killer_name:?}, as it happened before the first `InitGame`");
                    },
                }
                None
            },
        }
    }

    /// Signals the end of the events, returning the game that was still active, if any
    pub fn finish(&mut self) -> Option<Game> {
        self.current.take()
    }

}

/// Accounts for a single kill in `game`:
///   - the victim is always a player & the means of death is always counted;
///   - suicides take a frag from the player;
///   - kills by [WORLD] take a frag from the victim -- [WORLD] is never a player;
///   - any other kill gives a frag to the killer.
fn record_kill(game: &mut Game, killer_name: &str, victim_name: &str, means_of_death: &str) {
    game.total_kills += 1;
    game.players.insert(victim_name.to_owned());
    *game.kills_by_means.get_or_default_mut(means_of_death) += 1;
    if killer_name == victim_name {
        *game.kills.get_or_default_mut(killer_name) -= 1;
    } else if killer_name != WORLD {
        game.players.insert(killer_name.to_owned());
        *game.kills.get_or_default_mut(killer_name) += 1;
    } else {
        *game.kills.get_or_default_mut(victim_name) -= 1;
    }
}

/// Operates on the `events` stream, yielding each [Game] as soon as it is complete -- that is, when the next one starts.
/// The last game is yielded when `events` end.
pub fn build_games(config: Arc<Config>, events: impl Stream<Item=Quake3Events>) -> impl Stream<Item=Game> {
    let mut builder = GameSessionBuilder::new(config);
    events
        .map(Some)
        .chain(stream::once(future::ready(None)))
        .filter_map(move |event_option| future::ready(match event_option {
            Some(event) => builder.feed(event),
            None => builder.finish(),
        }))
}

/// Builds the games out of the events provided by `log_dao`.\
/// Fails only if the log can't be read -- see [dal_api::LogSourceError].
pub fn summarize_games(config: Arc<Config>, log_dao: Box<dyn Quake3LogSource>) -> Result<impl Stream<Item=Game>> {
    let stream = log_dao.events_stream()?;
    Ok(build_games(config, stream))
}

/// Synchronous version of [summarize_games()], collecting all the games
pub fn collect_games(config: Arc<Config>, log_dao: Box<dyn Quake3LogSource>) -> Result<Vec<Game>> {
    let stream = summarize_games(config, log_dao)?;
    Ok(futures::executor::block_on_stream(Box::pin(stream)).collect())
}
