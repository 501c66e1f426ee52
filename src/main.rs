//! Main entry point for the terminal client.
//!
//! Parses settings, initializes logging, starts the UI, timer and sync actors on one actix
//! system, and reads the keyboard until the player quits.

use std::fs::File;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix::prelude::*;
use clap::Parser;
use log::info;

use grid_client::client::WorldClient;
use grid_client::config::ClientConfig;
use grid_client::config::sync::DEFAULT_GAME_SECONDS;
use grid_client::sync::messages::Shutdown;
use grid_client::sync::{SyncLoop, TimerReconciler};
use grid_client::terminal::{Screen, TerminalBell, TerminalGuard, TerminalView, spawn_input_thread};
use grid_client::ui::GameUi;
use grid_client::ui::view::{Muted, SoundPlayer};

fn main() -> io::Result<()> {
    let config = ClientConfig::parse();
    init_logging(&config)?;
    config
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let client = WorldClient::new(config.base_url(), config.request_timeout(), config.direction_encoding())
        .map_err(io::Error::other)?;

    // Restores the terminal when main returns, on error too.
    let _guard = TerminalGuard::enter()?;
    let stop_input = Arc::new(AtomicBool::new(false));

    let system = System::new();
    let input = system.block_on(async {
        let view = TerminalView::new(Screen::new(DEFAULT_GAME_SECONDS));
        view.redraw();

        let sound: Box<dyn SoundPlayer> = if config.no_sound {
            Box::new(Muted)
        } else {
            Box::new(TerminalBell)
        };
        let ui = GameUi::new(Box::new(view.clone()), sound).start();
        let timer = TimerReconciler::new(config.timer_tick(), Box::new(view), ui.clone().recipient()).start();
        let sync = SyncLoop::new(client, ui, timer, config.poll_interval())
            .stop_system_on_shutdown()
            .start();

        let on_signal = sync.clone();
        actix::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_signal.do_send(Shutdown);
            }
        });

        spawn_input_thread(sync, stop_input.clone())
    });

    let result = system.run();
    stop_input.store(true, Ordering::Relaxed);
    let _ = input.join();
    info!("[Main] Client stopped");
    result
}

/// Logs go to a file when one is configured; stderr would tear the terminal screen.
fn init_logging(config: &ClientConfig) -> io::Result<()> {
    let default_filter = if config.log_file.is_some() { "info" } else { "error" };
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
