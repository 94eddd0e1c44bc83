//! AlgoViz Playback
//!
//! Turns a recorded trace into a navigable, time-scrubbable animation.
//!
//! # Architecture
//!
//! - **Playback**: the cursor state machine — load/play/pause/step/seek
//!   plus a `tick` operation for the scheduling loop. Boundary cases
//!   (empty trace, stepping past either end) degrade to no-ops with a
//!   [`PlaybackNotice`] instead of erroring.
//! - **SpeedLevel**: levels 1..=5 mapped exponentially to auto-advance
//!   delays of 1000 / 2^(level-1) ms.
//! - **PlaybackDriver**: a tokio task owning the controller and the
//!   single auto-advance timer; control commands cancel the pending tick
//!   before mutating the cursor, so two timers can never race.

mod driver;
mod playback;

pub use driver::{Command, DriverClosed, PlaybackDriver};
pub use playback::{Playback, PlaybackNotice, PlaybackStatus, SpeedLevel, Tick};
