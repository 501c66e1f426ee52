/// Synchronization configuration constants.
///
/// This module defines the cadence of the world poll and of the local countdown.
pub const POLL_INTERVAL_MS: u64 = 100; // Delay between two world polls.

/// Period of one local countdown tick, in milliseconds.
pub const TIMER_TICK_MS: u64 = 1000;

/// Game length (in seconds) shown before the first snapshot arrives.
pub const DEFAULT_GAME_SECONDS: u32 = 180;
