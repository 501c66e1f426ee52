/// World synchronization actor.
///
/// Polls `/world` on a fixed interval and forwards every snapshot to the game UI and the
/// countdown. Also performs moves and restarts for the input layer, so all server traffic
/// goes through one place.
///
/// Two guards keep the mirror consistent:
/// - a poll is skipped while the previous one is still in flight;
/// - responses to requests issued before the latest restart are dropped (restart epoch).

use std::time::Duration;

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info, warn};

use crate::client::error::ClientError;
use crate::client::types::WorldSnapshot;
use crate::client::world_client::WorldClient;
use crate::sync::messages::{GetSyncStatus, MovePlayer, RestartGame, Seed, Shutdown, StopTimer, SyncStatus};
use crate::sync::timer::TimerReconciler;
use crate::ui::game_ui::GameUi;
use crate::ui::messages::{ApplySnapshot, Restarted};

pub struct SyncLoop {
    /// HTTP access to the world server.
    client: WorldClient,
    /// Receives every accepted snapshot.
    ui: Addr<GameUi>,
    /// Reseeded whenever a snapshot carries a time.
    timer: Addr<TimerReconciler>,
    /// Time between two polls.
    poll_interval: Duration,
    /// Repeating poll schedule, cancelled on shutdown.
    poll_handle: Option<SpawnHandle>,
    /// Set while a `/restart` request is pending; further restarts are ignored.
    restart_in_flight: bool,
    /// Once set, no response reaches the UI or timer any more.
    shutting_down: bool,
    /// Stop the whole actix system when this actor stops (binary only).
    stop_system_on_shutdown: bool,
    /// Counters, the in-flight flag and the restart epoch.
    status: SyncStatus,
}

impl SyncLoop {
    pub fn new(client: WorldClient, ui: Addr<GameUi>, timer: Addr<TimerReconciler>, poll_interval: Duration) -> Self {
        Self {
            client,
            ui,
            timer,
            poll_interval,
            poll_handle: None,
            restart_in_flight: false,
            shutting_down: false,
            stop_system_on_shutdown: false,
            status: SyncStatus::default(),
        }
    }

    /// Stop the whole actor system on `Shutdown` (used by the binary).
    pub fn stop_system_on_shutdown(mut self) -> Self {
        self.stop_system_on_shutdown = true;
        self
    }

    /// One poll tick.
    fn poll(&mut self, ctx: &mut Context<Self>) {
        if self.status.poll_in_flight {
            self.status.polls_skipped += 1;
            debug!("[SyncLoop] Previous poll still in flight, skipping tick");
            return;
        }
        self.status.poll_in_flight = true;
        self.status.polls_started += 1;

        let client = self.client.clone();
        let epoch = self.status.epoch;
        ctx.spawn(
            async move { client.fetch_world().await }
                .into_actor(self)
                .map(move |result, act, _ctx| {
                    act.status.poll_in_flight = false;
                    match result {
                        Ok(mut snapshot) => {
                            // `collected` only means something on a move response.
                            snapshot.collected = false;
                            act.deliver(epoch, snapshot);
                        }
                        Err(e) => {
                            act.status.polls_failed += 1;
                            act.record_failure(&e);
                        }
                    }
                }),
        );
    }

    /// Forward a snapshot to the UI and the countdown, unless a restart made it stale.
    fn deliver(&mut self, epoch: u64, snapshot: WorldSnapshot) {
        if self.shutting_down {
            return;
        }
        if epoch != self.status.epoch {
            self.status.stale_dropped += 1;
            debug!("[SyncLoop] Dropped snapshot from epoch {} (current {})", epoch, self.status.epoch);
            return;
        }
        let seconds = snapshot.countdown_seconds();
        self.ui.do_send(ApplySnapshot { snapshot });
        if let Some(seconds) = seconds {
            self.timer.do_send(Seed { seconds });
        }
    }

    /// Failures are never retried; the next poll heals the display.
    fn record_failure(&self, error: &ClientError) {
        warn!("[SyncLoop] {}, keeping last state", error);
    }
}

impl Actor for SyncLoop {
    type Context = Context<Self>;

    /// Starts polling right away, then on every interval.
    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[SyncLoop] Polling {} every {:?}", self.client.base_url(), self.poll_interval);
        self.poll(ctx);
        let handle = ctx.run_interval(self.poll_interval, |act, ctx| {
            act.poll(ctx);
        });
        self.poll_handle = Some(handle);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        debug!("[SyncLoop] Stopped");
        if self.stop_system_on_shutdown {
            System::current().stop();
        }
    }
}

impl Handler<MovePlayer> for SyncLoop {
    type Result = ();

    fn handle(&mut self, msg: MovePlayer, ctx: &mut Self::Context) -> Self::Result {
        let client = self.client.clone();
        let epoch = self.status.epoch;
        let direction = msg.direction;
        ctx.spawn(
            async move { client.move_player(direction).await }
                .into_actor(self)
                .map(move |result, act, _ctx| match result {
                    Ok(snapshot) => act.deliver(epoch, snapshot),
                    Err(e) => act.record_failure(&e),
                }),
        );
    }
}

impl Handler<RestartGame> for SyncLoop {
    type Result = ();

    fn handle(&mut self, _msg: RestartGame, ctx: &mut Self::Context) -> Self::Result {
        if self.restart_in_flight {
            debug!("[SyncLoop] Restart already in progress");
            return;
        }
        self.restart_in_flight = true;
        info!("[SyncLoop] Restart requested");

        let client = self.client.clone();
        ctx.spawn(
            async move { client.restart().await }
                .into_actor(self)
                .map(|result, act, ctx| {
                    act.restart_in_flight = false;
                    match result {
                        Ok(snapshot) => {
                            // Everything requested before this point belongs to the old game.
                            act.status.epoch += 1;
                            let seconds = snapshot.countdown_seconds();
                            act.ui.do_send(Restarted { snapshot });
                            if let Some(seconds) = seconds {
                                act.timer.do_send(Seed { seconds });
                            }
                            info!("[SyncLoop] Game restarted (epoch {})", act.status.epoch);
                            // Resync the grid right away.
                            act.poll(ctx);
                        }
                        Err(e) => act.record_failure(&e),
                    }
                }),
        );
    }
}

impl Handler<Shutdown> for SyncLoop {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Self::Context) -> Self::Result {
        info!("[SyncLoop] Shutting down");
        self.shutting_down = true;
        if let Some(handle) = self.poll_handle.take() {
            ctx.cancel_future(handle);
        }
        self.timer.do_send(StopTimer);
        ctx.stop();
    }
}

impl Handler<GetSyncStatus> for SyncLoop {
    type Result = MessageResult<GetSyncStatus>;

    fn handle(&mut self, _msg: GetSyncStatus, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.status)
    }
}
