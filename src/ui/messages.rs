use actix::prelude::*;

use crate::client::types::WorldSnapshot;

/// A fresh snapshot from a poll or a move.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct ApplySnapshot {
    pub snapshot: WorldSnapshot,
}

/// The server accepted a restart; `snapshot` is its response.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct Restarted {
    pub snapshot: WorldSnapshot,
}

/// The local countdown reached zero.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct TimerExpired;

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "crate::ui::state_machine::UiPhase")]
pub struct GetPhase;
