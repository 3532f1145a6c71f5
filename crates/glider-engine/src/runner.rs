//! User-facing [`Runner`] handle: spawn, submit, run state, shutdown.
//!
//! The runner moves a [`World`] onto a dedicated tick thread and keeps
//! only a command channel and a join handle. Mutual exclusion comes
//! from ownership: exactly one thread can touch the world, so there is
//! nothing to lock.
//!
//! # Architecture
//!
//! ```text
//! User Thread                      Tick Thread
//!     |                                |
//!     |--submit(command)-------------->| cmd_rx.recv_deadline(next_tick)
//!     |   [cmd_tx: bounded(N)]         | world.apply() / play / pause
//!     |<--receipt via reply channel----|
//!     |                                | on deadline: world.tick()
//!     |                                | sink.on_frame(&frame)
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use glider_core::{Command, Receipt};
use glider_grid::Frame;

use crate::config::{ConfigError, WorldConfig};
use crate::tick_thread::{RunLoop, Submission};
use crate::world::World;

// ── Error types ──────────────────────────────────────────────────

/// Error submitting a command to the tick thread.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The tick thread has shut down.
    Shutdown,
    /// The command channel is full (back-pressure).
    ChannelFull,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ChannelFull => write!(f, "command channel full"),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── RunState ─────────────────────────────────────────────────────

/// Whether the tick thread is auto-advancing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No tick is scheduled; the world advances only on `Step`.
    Stopped,
    /// Ticks fire on the configured interval.
    Running,
}

// ── FrameSink ────────────────────────────────────────────────────

/// Receives every published [`Frame`] on the tick thread.
///
/// The sink is moved into the tick thread, so implementations must be
/// `Send`. Any `FnMut(&Frame) + Send` closure qualifies:
///
/// ```
/// use glider_engine::{Runner, WorldConfig};
///
/// let runner = Runner::spawn(&WorldConfig::new(10, 10), |frame: &glider_grid::Frame| {
///     println!("gen {}: {} alive", frame.generation(), frame.live_cells());
/// })
/// .unwrap();
/// # drop(runner);
/// ```
pub trait FrameSink: Send {
    /// Called after every tick and after bulk mutations (populate,
    /// clear, resize).
    fn on_frame(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame) + Send> FrameSink for F {
    fn on_frame(&mut self, frame: &Frame) {
        self(frame)
    }
}

// ── Runner ───────────────────────────────────────────────────────

/// Handle to a simulation running on its own tick thread.
///
/// All mutation goes through [`submit`](Runner::submit) (or the
/// [`play`](Runner::play) / [`pause`](Runner::pause) /
/// [`step`](Runner::step) conveniences); each call blocks until the
/// tick thread answers with a [`Receipt`]. Dropping the runner shuts
/// the thread down.
pub struct Runner {
    cmd_tx: Option<crossbeam_channel::Sender<Submission>>,
    tick_thread: Option<JoinHandle<World>>,
    running: Arc<AtomicBool>,
}

impl Runner {
    /// Build a world from `config` and spawn its tick thread.
    ///
    /// The world starts stopped: no ticks fire until `Play` or `Step`.
    pub fn spawn(
        config: &WorldConfig,
        sink: impl FrameSink + 'static,
    ) -> Result<Self, ConfigError> {
        let world = World::new(config)?;
        let running = Arc::new(AtomicBool::new(false));
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(config.command_buffer);

        let interval = config.interval;
        let loop_running = Arc::clone(&running);
        let sink: Box<dyn FrameSink> = Box::new(sink);
        let tick_thread = thread::Builder::new()
            .name("glider-tick".into())
            .spawn(move || RunLoop::new(world, sink, cmd_rx, interval, loop_running).run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            cmd_tx: Some(cmd_tx),
            tick_thread: Some(tick_thread),
            running,
        })
    }

    /// Submit one command and wait for its receipt.
    ///
    /// Blocks only for the reply, which arrives as soon as the tick
    /// thread reaches the command (at most one tick pass away).
    pub fn submit(&self, command: Command) -> Result<Receipt, SubmitError> {
        let cmd_tx = self.cmd_tx.as_ref().ok_or(SubmitError::Shutdown)?;

        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        let submission = Submission {
            command,
            reply: reply_tx,
        };

        cmd_tx.try_send(submission).map_err(|e| match e {
            crossbeam_channel::TrySendError::Full(_) => SubmitError::ChannelFull,
            crossbeam_channel::TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })?;

        reply_rx.recv().map_err(|_| SubmitError::Shutdown)
    }

    /// Set the tick interval, then start playing.
    ///
    /// An interval rejection (zero duration) is returned without
    /// starting the schedule.
    pub fn play(&self, interval: Duration) -> Result<Receipt, SubmitError> {
        let receipt = self.submit(Command::SetInterval(interval))?;
        if !receipt.accepted {
            return Ok(receipt);
        }
        self.submit(Command::Play)
    }

    /// Stop automatic ticking and cancel any pending tick. Idempotent.
    pub fn pause(&self) -> Result<Receipt, SubmitError> {
        self.submit(Command::Pause)
    }

    /// Pause if playing, then advance exactly one generation.
    pub fn step(&self) -> Result<Receipt, SubmitError> {
        self.submit(Command::Step)
    }

    /// Whether the tick thread is currently auto-advancing.
    ///
    /// Lock-free read of a flag the tick thread maintains; momentarily
    /// stale while a play or pause command is in flight.
    pub fn run_state(&self) -> RunState {
        if self.running.load(Ordering::Acquire) {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    /// Stop the tick thread and recover the final world state.
    ///
    /// Returns `None` on repeated calls or when the thread panicked.
    pub fn shutdown(&mut self) -> Option<World> {
        // Dropping the sender disconnects the channel; the loop exits
        // at its next blocking point.
        self.cmd_tx.take();
        self.tick_thread
            .take()
            .and_then(|handle| handle.join().ok())
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.shutdown();
    }
}
