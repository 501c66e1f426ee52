//! Local countdown, reconciled with server time.
//!
//! The server is authoritative. The countdown only keeps the display moving between
//! snapshots, and every snapshot that carries a time reseeds it.

use std::time::Duration;

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};

use crate::sync::messages::{GetRemaining, Seed, StopTimer};
use crate::ui::messages::TimerExpired;
use crate::ui::view::TimerDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
}

/// Outcome of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Counting(u32),
    /// Reached zero on this tick. Happens once per seed.
    Expired,
    /// Tick arrived while idle.
    Idle,
}

/// Pure countdown state.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    remaining: u32,
    phase: TimerPhase,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            phase: TimerPhase::Idle,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Zero seconds leaves the countdown idle.
    pub fn seed(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.phase = if seconds > 0 { TimerPhase::Running } else { TimerPhase::Idle };
    }

    pub fn tick(&mut self) -> Tick {
        if self.phase == TimerPhase::Idle {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = TimerPhase::Idle;
            Tick::Expired
        } else {
            Tick::Counting(self.remaining)
        }
    }

    pub fn stop(&mut self) {
        self.phase = TimerPhase::Idle;
    }
}

/// Countdown actor. Owns the tick schedule and the timer display.
pub struct TimerReconciler {
    /// Remaining seconds and idle / running phase.
    countdown: Countdown,
    /// Time between two ticks, one second outside tests.
    tick_period: Duration,
    /// The single live tick schedule, if running.
    tick_handle: Option<SpawnHandle>,
    /// Where the remaining time is shown.
    display: Box<dyn TimerDisplay>,
    /// Told once when the countdown reaches zero.
    on_expired: Recipient<TimerExpired>,
}

impl TimerReconciler {
    pub fn new(tick_period: Duration, display: Box<dyn TimerDisplay>, on_expired: Recipient<TimerExpired>) -> Self {
        Self {
            countdown: Countdown::new(0),
            tick_period,
            tick_handle: None,
            display,
            on_expired,
        }
    }

    fn cancel_tick(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.tick_handle.take() {
            ctx.cancel_future(handle);
        }
    }

    fn on_tick(&mut self, ctx: &mut Context<Self>) {
        match self.countdown.tick() {
            Tick::Counting(remaining) => {
                self.display.show_time(remaining);
                self.display.present();
            }
            Tick::Expired => {
                self.cancel_tick(ctx);
                self.display.show_time(0);
                self.display.present();
                info!("[Timer] Countdown expired");
                self.on_expired.do_send(TimerExpired);
            }
            Tick::Idle => self.cancel_tick(ctx),
        }
    }
}

impl Actor for TimerReconciler {
    type Context = Context<Self>;

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        debug!("[Timer] Stopped");
    }
}

impl Handler<Seed> for TimerReconciler {
    type Result = ();

    fn handle(&mut self, msg: Seed, ctx: &mut Self::Context) -> Self::Result {
        // Always cancel before reseeding so only one tick schedule exists.
        self.cancel_tick(ctx);
        self.countdown.seed(msg.seconds);
        self.display.show_time(self.countdown.remaining());
        self.display.present();
        if self.countdown.phase() == TimerPhase::Running {
            let handle = ctx.run_interval(self.tick_period, |act, ctx| {
                act.on_tick(ctx);
            });
            self.tick_handle = Some(handle);
        }
    }
}

impl Handler<StopTimer> for TimerReconciler {
    type Result = ();

    fn handle(&mut self, _msg: StopTimer, ctx: &mut Self::Context) -> Self::Result {
        self.cancel_tick(ctx);
        self.countdown.stop();
        debug!("[Timer] Countdown stopped at {}", self.countdown.remaining());
    }
}

impl Handler<GetRemaining> for TimerReconciler {
    type Result = MessageResult<GetRemaining>;

    fn handle(&mut self, _msg: GetRemaining, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult((self.countdown.phase(), self.countdown.remaining()))
    }
}
