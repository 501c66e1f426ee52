//! Synchronization layer root module.
//!
//! This module keeps the client mirror in step with the server:
//! - The poll loop (world fetches, moves, restarts)
//! - The local countdown reconciled with server time
//! - Messages exchanged between those actors

pub mod messages;
pub mod timer;
pub mod sync_loop;

pub use sync_loop::SyncLoop;
pub use timer::{Countdown, TimerPhase, TimerReconciler};
