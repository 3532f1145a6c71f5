//! Tick loop, command handling, and interval scheduling for the run
//! thread.
//!
//! The tick thread owns the [`World`] exclusively (moved in via
//! `thread::Builder::spawn`). No locks anywhere: commands arrive on a
//! bounded crossbeam channel and receipts go back on per-command
//! oneshot channels. Scheduling rides the same channel via
//! `recv_deadline`, so a pending tick and an incoming command share one
//! blocking point and pausing is nothing more than dropping the
//! deadline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};

use glider_core::{Command, CommandError, Receipt};

use crate::runner::FrameSink;
use crate::world::World;

/// A command submitted by a user thread, paired with a reply channel
/// for the resulting receipt.
pub(crate) struct Submission {
    pub command: Command,
    pub reply: crossbeam_channel::Sender<Receipt>,
}

/// Commands that republish a frame without a tick. Bulk mutations
/// repaint sinks promptly; single-cell edits wait for the next tick.
fn emits_frame(command: &Command) -> bool {
    matches!(
        command,
        Command::Populate(_) | Command::Clear | Command::Resize { .. }
    )
}

/// State held by the tick thread's main loop.
pub(crate) struct RunLoop {
    world: World,
    sink: Box<dyn FrameSink>,
    cmd_rx: Receiver<Submission>,
    /// Delay between scheduled ticks. Updated by `SetInterval`; an
    /// armed deadline keeps its old value until the next re-arm.
    interval: Duration,
    /// Deadline of the next scheduled tick. `None` means stopped.
    next_tick_at: Option<Instant>,
    /// Mirror of `next_tick_at.is_some()` readable from the handle.
    running: Arc<AtomicBool>,
}

impl RunLoop {
    pub fn new(
        world: World,
        sink: Box<dyn FrameSink>,
        cmd_rx: Receiver<Submission>,
        interval: Duration,
        running: Arc<AtomicBool>,
    ) -> Self {
        Self {
            world,
            sink,
            cmd_rx,
            interval,
            next_tick_at: None,
            running,
        }
    }

    /// Main loop. Runs until the command sender disconnects (the
    /// `Runner` handle was shut down or dropped).
    ///
    /// Consumes self and returns the `World` so the runner can recover
    /// the final state via `JoinHandle<World>`.
    pub fn run(mut self) -> World {
        loop {
            let submission = match self.next_tick_at {
                Some(deadline) => match self.cmd_rx.recv_deadline(deadline) {
                    Ok(submission) => submission,
                    Err(RecvTimeoutError::Timeout) => {
                        self.run_tick();
                        // Re-arm relative to completion, not to the old
                        // deadline: a slow tick delays the next one
                        // instead of bunching ticks to catch up.
                        self.next_tick_at = Some(Instant::now() + self.interval);
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                },
                // Stopped: nothing scheduled, block until a command
                // arrives or every sender is gone.
                None => match self.cmd_rx.recv() {
                    Ok(submission) => submission,
                    Err(_) => break,
                },
            };

            let receipt = self.handle_command(submission.command);
            // Best-effort reply: the caller may have dropped its receiver.
            let _ = submission.reply.send(receipt);
        }

        self.running.store(false, Ordering::Release);
        self.world
    }

    fn handle_command(&mut self, command: Command) -> Receipt {
        match command {
            Command::Play => {
                if self.next_tick_at.is_none() {
                    // The first tick fires immediately; the schedule
                    // starts counting after it completes.
                    self.run_tick();
                    self.next_tick_at = Some(Instant::now() + self.interval);
                    self.running.store(true, Ordering::Release);
                }
                Receipt::applied(self.world.generation())
            }
            Command::Pause => {
                self.disarm();
                Receipt::applied(self.world.generation())
            }
            Command::Step => {
                self.disarm();
                self.run_tick();
                Receipt::applied(self.world.generation())
            }
            Command::SetInterval(interval) => {
                if interval.is_zero() {
                    return Receipt::rejected(CommandError::InvalidInterval { interval });
                }
                self.interval = interval;
                Receipt::applied(self.world.generation())
            }
            grid_command => match self.world.apply(&grid_command) {
                Ok(()) => {
                    if emits_frame(&grid_command) {
                        self.publish_frame();
                    }
                    Receipt::applied(self.world.generation())
                }
                Err(reason) => Receipt::rejected(reason),
            },
        }
    }

    fn run_tick(&mut self) {
        self.world.tick();
        self.publish_frame();
    }

    fn publish_frame(&mut self) {
        let frame = self.world.frame();
        self.sink.on_frame(&frame);
    }

    fn disarm(&mut self) {
        self.next_tick_at = None;
        self.running.store(false, Ordering::Release);
    }
}
