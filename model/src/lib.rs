//! Business entities shared by all layers: the events we care about, as translated by the DAL,
//! and the [game::Game] records built out of them

pub mod game;
pub mod ordered_map;
pub mod quake3_events;
