//! Library for making sense of Quake 3 server log files.
//!
//! Offers the recognition of the log lines relevant for kill statistics -- see [deserializer] --
//! and the resolution of the "means of death" codes into their names -- see [means_of_death].

pub mod deserializer;
pub mod means_of_death;
