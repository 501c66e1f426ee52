use actix::prelude::*;

use crate::client::types::Direction;
use crate::sync::timer::TimerPhase;

/// Reseed the countdown from server time.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Seed {
    pub seconds: u32,
}

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct StopTimer;

/// Query: current timer phase and remaining seconds.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "(TimerPhase, u32)")]
pub struct GetRemaining;

/// Player input: move one cell.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct MovePlayer {
    pub direction: Direction,
}

/// Player input: restart the game in place.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct RestartGame;

/// Cancel polling and the countdown.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Shutdown;

/// Counters describing the poll loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStatus {
    pub poll_in_flight: bool,
    pub polls_started: u64,
    pub polls_skipped: u64,
    pub polls_failed: u64,
    pub stale_dropped: u64,
    pub epoch: u64,
}

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "SyncStatus")]
pub struct GetSyncStatus;
