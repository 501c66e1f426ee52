//! Client for the grid game server.
//!
//! Mirrors the server-authoritative world: polls `/world`, forwards moves and restarts,
//! keeps a local countdown in step with server time, and switches between the playing and
//! game-over screens. All actors run on a single actix system.

pub mod config;
pub mod client;
pub mod sync;
pub mod ui;
pub mod terminal;
