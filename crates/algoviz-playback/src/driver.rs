//! Timer-driven auto-advance around the playback controller.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use algoviz_trace::Trace;

use crate::playback::{Playback, PlaybackStatus, SpeedLevel, Tick};

/// The driver task has stopped and can no longer accept commands.
#[derive(Debug, Error)]
#[error("playback driver is no longer running")]
pub struct DriverClosed;

/// Control commands accepted by the driver task.
#[derive(Debug)]
pub enum Command {
    Load(Trace),
    Play,
    Pause,
    Reset,
    StepForward,
    StepBackward,
    Seek(usize),
    SetSpeed(SpeedLevel),
    Status(oneshot::Sender<PlaybackStatus>),
}

/// Owns the playback controller inside a single tokio task.
///
/// The task loops over a command channel and a single auto-advance
/// deadline, armed only while playing. Every control command cancels the
/// pending tick before mutating the cursor and reschedules from now, so
/// two timers can never race to advance it. All mutation happens inside
/// the task; no locks.
#[derive(Debug)]
pub struct PlaybackDriver {
    commands: mpsc::Sender<Command>,
    handle: JoinHandle<Playback>,
}

impl PlaybackDriver {
    /// Spawn the driver task around `playback`.
    pub fn spawn(playback: Playback) -> Self {
        let (commands, rx) = mpsc::channel(16);
        let handle = tokio::spawn(run(playback, rx));
        Self { commands, handle }
    }

    /// Send a raw command.
    pub async fn send(&self, command: Command) -> Result<(), DriverClosed> {
        self.commands.send(command).await.map_err(|_| DriverClosed)
    }

    /// Replace the loaded trace; cursor returns to 0, playback stops.
    pub async fn load(&self, trace: Trace) -> Result<(), DriverClosed> {
        self.send(Command::Load(trace)).await
    }

    /// Start auto-advance.
    pub async fn play(&self) -> Result<(), DriverClosed> {
        self.send(Command::Play).await
    }

    /// Stop auto-advance.
    pub async fn pause(&self) -> Result<(), DriverClosed> {
        self.send(Command::Pause).await
    }

    /// Return to the first step and stop.
    pub async fn reset(&self) -> Result<(), DriverClosed> {
        self.send(Command::Reset).await
    }

    /// Manually advance one step.
    pub async fn step_forward(&self) -> Result<(), DriverClosed> {
        self.send(Command::StepForward).await
    }

    /// Manually move back one step.
    pub async fn step_backward(&self) -> Result<(), DriverClosed> {
        self.send(Command::StepBackward).await
    }

    /// Jump to an index (clamped).
    pub async fn seek(&self, index: usize) -> Result<(), DriverClosed> {
        self.send(Command::Seek(index)).await
    }

    /// Change the auto-advance speed.
    pub async fn set_speed(&self, speed: SpeedLevel) -> Result<(), DriverClosed> {
        self.send(Command::SetSpeed(speed)).await
    }

    /// Current playback state.
    ///
    /// Because commands are processed in order, the returned snapshot
    /// reflects every command sent before this call.
    pub async fn status(&self) -> Result<PlaybackStatus, DriverClosed> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Status(tx)).await?;
        rx.await.map_err(|_| DriverClosed)
    }

    /// Stop the task and recover the controller.
    pub async fn shutdown(self) -> Playback {
        drop(self.commands);
        self.handle.await.expect("playback driver task panicked")
    }
}

async fn run(mut playback: Playback, mut commands: mpsc::Receiver<Command>) -> Playback {
    use tokio::time::{sleep_until, Instant};

    // Deadline of the single outstanding auto-advance tick, if any.
    let mut next_tick: Option<Instant> = None;

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                // Status is read-only and leaves the pending tick
                // scheduled; every control command cancels it first.
                let control = !matches!(command, Command::Status(_));
                apply(&mut playback, command);
                if control {
                    next_tick = playback
                        .is_playing()
                        .then(|| Instant::now() + playback.speed().delay());
                }
            }
            _ = sleep_until(next_tick.unwrap_or_else(Instant::now)), if next_tick.is_some() => {
                next_tick = match playback.tick() {
                    Tick::Advanced(_) => Some(Instant::now() + playback.speed().delay()),
                    Tick::Completed => {
                        tracing::info!("playback reached the last step");
                        None
                    }
                    Tick::Idle => None,
                };
            }
        }
    }
    playback
}

fn apply(playback: &mut Playback, command: Command) {
    match command {
        Command::Load(trace) => playback.load(trace),
        Command::Play => {
            if let Some(notice) = playback.play() {
                tracing::info!(?notice, "play request degraded to a no-op");
            }
        }
        Command::Pause => playback.pause(),
        Command::Reset => playback.reset(),
        Command::StepForward => {
            if let Some(notice) = playback.step_forward() {
                tracing::info!(?notice, "step request degraded to a no-op");
            }
        }
        Command::StepBackward => {
            if let Some(notice) = playback.step_backward() {
                tracing::info!(?notice, "step request degraded to a no-op");
            }
        }
        Command::Seek(index) => playback.seek(index),
        Command::SetSpeed(speed) => playback.set_speed(speed),
        Command::Status(reply) => {
            let _ = reply.send(playback.status());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_trace::TraceStep;
    use std::time::Duration;

    fn make_trace(count: usize) -> Trace {
        Trace::new(
            (0..count)
                .map(|i| TraceStep {
                    description: format!("step {i}"),
                    ..TraceStep::default()
                })
                .collect(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_follows_the_speed_delay() {
        let driver = PlaybackDriver::spawn(Playback::with_trace(make_trace(5)));
        driver.play().await.unwrap();
        assert_eq!(driver.status().await.unwrap().current_index, 0);

        // Speed defaults to level 3 = 250 ms per step.
        tokio::time::sleep(Duration::from_millis(260)).await;
        assert_eq!(driver.status().await.unwrap().current_index, 1);

        tokio::time::sleep(Duration::from_millis(510)).await;
        assert_eq!(driver.status().await.unwrap().current_index, 3);

        let playback = driver.shutdown().await;
        assert_eq!(playback.current_index(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_cancels_the_pending_tick() {
        let driver = PlaybackDriver::spawn(Playback::with_trace(make_trace(5)));
        driver.play().await.unwrap();
        driver.pause().await.unwrap();

        tokio::time::sleep(Duration::from_secs(5)).await;
        let status = driver.status().await.unwrap();
        assert_eq!(status.current_index, 0);
        assert!(!status.is_playing);

        driver.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn playback_stops_at_the_last_step() {
        let driver = PlaybackDriver::spawn(Playback::with_trace(make_trace(3)));
        driver.set_speed(SpeedLevel::MAX).await.unwrap();
        driver.play().await.unwrap();

        tokio::time::sleep(Duration::from_secs(1)).await;
        let status = driver.status().await.unwrap();
        assert_eq!(status.current_index, 2);
        assert!(!status.is_playing);

        driver.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn manual_steps_and_seek_apply_in_order() {
        let driver = PlaybackDriver::spawn(Playback::new());
        driver.load(make_trace(4)).await.unwrap();

        driver.step_forward().await.unwrap();
        driver.step_forward().await.unwrap();
        driver.step_backward().await.unwrap();
        assert_eq!(driver.status().await.unwrap().current_index, 1);

        driver.seek(100).await.unwrap();
        assert_eq!(driver.status().await.unwrap().current_index, 3);

        driver.reset().await.unwrap();
        let status = driver.status().await.unwrap();
        assert_eq!(status.current_index, 0);
        assert!(!status.is_playing);

        driver.shutdown().await;
    }
}
