//! Data Access Layer: reads Quake 3 server logs from their sources and translates them into
//! a `Stream` of [model::quake3_events::Quake3Events] -- see [dal_api::Quake3LogSource]

pub mod factory;
pub mod sync_file_reader;
pub mod sync_reader;
pub mod stdin_reader;

mod events_translation;
