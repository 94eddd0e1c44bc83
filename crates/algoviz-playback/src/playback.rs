//! Playback controller for algorithm traces.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use algoviz_trace::{Trace, TraceStep};

/// Base auto-advance delay at speed level 1.
const BASE_DELAY_MICROS: u64 = 1_000_000;

/// Playback speed level in 1..=5.
///
/// The auto-advance delay halves per level: 1000 / 2^(level-1) ms, giving
/// {1000, 500, 250, 125, 62.5} ms. (The linear 1000/level mapping that
/// also circulated is rejected; the exponential form makes the speed
/// difference noticeable.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    /// Slowest level.
    pub const MIN: Self = Self(1);
    /// Fastest level.
    pub const MAX: Self = Self(5);

    /// Create a speed level, clamping into 1..=5.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The raw level.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Auto-advance delay at this level.
    pub fn delay(&self) -> Duration {
        Duration::from_micros(BASE_DELAY_MICROS >> (self.0 - 1))
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(3)
    }
}

/// User-visible notice from a boundary-degraded operation.
///
/// These are expected navigation edge cases, not errors; the presentation
/// layer surfaces them as notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackNotice {
    /// `play` was requested with no trace loaded.
    EmptyTrace,
    /// `step_backward` at index 0.
    AtStart,
    /// `step_forward` at the last index.
    AtEnd,
    /// Auto-advance reached the last step and stopped.
    Completed,
}

/// Outcome of one auto-advance tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Cursor advanced to the given index.
    Advanced(usize),
    /// Cursor was already at the last step; playback stopped.
    Completed,
    /// Not playing; nothing happened.
    Idle,
}

/// Cursor and state machine over one trace.
///
/// Owns its state exclusively: the trace, the current index, the playing
/// flag, and the speed level are mutated only through these operations.
#[derive(Debug, Default)]
pub struct Playback {
    trace: Trace,
    current_index: usize,
    is_playing: bool,
    speed: SpeedLevel,
}

impl Playback {
    /// Create a controller with no trace loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller over `trace`, cursor at the first step.
    pub fn with_trace(trace: Trace) -> Self {
        Self {
            trace,
            ..Self::default()
        }
    }

    /// Replace the trace; cursor returns to 0 and playback stops.
    pub fn load(&mut self, trace: Trace) {
        self.trace = trace;
        self.current_index = 0;
        self.is_playing = false;
    }

    /// The loaded trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Current cursor position.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether auto-advance is active.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Current speed level.
    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    /// Change the speed level; takes effect on the next scheduled tick.
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        self.speed = speed;
    }

    /// The step under the cursor, if a trace is loaded.
    pub fn current_step(&self) -> Option<&TraceStep> {
        self.trace.step(self.current_index)
    }

    /// Start auto-advance.
    ///
    /// With an empty trace this is a no-op returning
    /// [`PlaybackNotice::EmptyTrace`]. At the last step the cursor seeks
    /// back to 0 first.
    pub fn play(&mut self) -> Option<PlaybackNotice> {
        if self.trace.is_empty() {
            return Some(PlaybackNotice::EmptyTrace);
        }
        if self.current_index >= self.trace.len() - 1 {
            self.current_index = 0;
        }
        self.is_playing = true;
        None
    }

    /// Stop auto-advance, keeping the cursor in place.
    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Return to the first step and stop auto-advance.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.is_playing = false;
    }

    /// Advance the cursor by one, clamped to the last step.
    pub fn step_forward(&mut self) -> Option<PlaybackNotice> {
        if self.current_index + 1 < self.trace.len() {
            self.current_index += 1;
            None
        } else {
            Some(PlaybackNotice::AtEnd)
        }
    }

    /// Move the cursor back by one, clamped to 0.
    pub fn step_backward(&mut self) -> Option<PlaybackNotice> {
        if self.current_index > 0 {
            self.current_index -= 1;
            None
        } else {
            Some(PlaybackNotice::AtStart)
        }
    }

    /// Jump to `index`, clamped to the trace bounds.
    pub fn seek(&mut self, index: usize) {
        self.current_index = index.min(self.trace.len().saturating_sub(1));
    }

    /// One auto-advance beat from the scheduling loop.
    pub fn tick(&mut self) -> Tick {
        if !self.is_playing {
            return Tick::Idle;
        }
        if self.current_index + 1 < self.trace.len() {
            self.current_index += 1;
            Tick::Advanced(self.current_index)
        } else {
            self.is_playing = false;
            Tick::Completed
        }
    }

    /// Progress through the trace in 0.0..=1.0.
    pub fn progress(&self) -> f64 {
        match self.trace.len() {
            0 => 0.0,
            1 => 1.0,
            len => self.current_index as f64 / (len - 1) as f64,
        }
    }

    /// Snapshot for the presentation boundary.
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(self)
    }
}

/// Playback state snapshot for sending to a frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub current_index: usize,
    pub total_steps: usize,
    pub is_playing: bool,
    pub speed: SpeedLevel,
    pub progress: f64,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            current_index: playback.current_index,
            total_steps: playback.trace.len(),
            is_playing: playback.is_playing,
            speed: playback.speed,
            progress: playback.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_trace::TraceStep;

    fn make_trace(count: usize) -> Trace {
        Trace::new(
            (0..count)
                .map(|i| TraceStep {
                    array: Some(vec![i as i64]),
                    description: format!("step {i}"),
                    ..TraceStep::default()
                })
                .collect(),
        )
    }

    #[test]
    fn starts_at_zero_not_playing() {
        let playback = Playback::with_trace(make_trace(5));
        assert_eq!(playback.current_index(), 0);
        assert!(!playback.is_playing());
        assert_eq!(playback.speed(), SpeedLevel::default());
    }

    #[test]
    fn speed_levels_halve_the_delay() {
        assert_eq!(SpeedLevel::new(1).delay(), Duration::from_millis(1000));
        assert_eq!(SpeedLevel::new(2).delay(), Duration::from_millis(500));
        assert_eq!(SpeedLevel::new(3).delay(), Duration::from_millis(250));
        assert_eq!(SpeedLevel::new(4).delay(), Duration::from_millis(125));
        assert_eq!(SpeedLevel::new(5).delay(), Duration::from_micros(62_500));
    }

    #[test]
    fn speed_level_clamps() {
        assert_eq!(SpeedLevel::new(0), SpeedLevel::MIN);
        assert_eq!(SpeedLevel::new(9), SpeedLevel::MAX);
    }

    #[test]
    fn play_on_empty_trace_is_noticed() {
        let mut playback = Playback::new();
        assert_eq!(playback.play(), Some(PlaybackNotice::EmptyTrace));
        assert!(!playback.is_playing());
    }

    #[test]
    fn play_at_end_rewinds_first() {
        let mut playback = Playback::with_trace(make_trace(3));
        playback.seek(2);
        assert_eq!(playback.play(), None);
        assert_eq!(playback.current_index(), 0);
        assert!(playback.is_playing());
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        let mut playback = Playback::with_trace(make_trace(3));

        assert_eq!(playback.step_backward(), Some(PlaybackNotice::AtStart));
        assert_eq!(playback.current_index(), 0);

        assert_eq!(playback.step_forward(), None);
        assert_eq!(playback.step_forward(), None);
        assert_eq!(playback.step_forward(), Some(PlaybackNotice::AtEnd));
        assert_eq!(playback.current_index(), 2);
    }

    #[test]
    fn tick_advances_then_completes() {
        let mut playback = Playback::with_trace(make_trace(3));
        assert_eq!(playback.tick(), Tick::Idle);

        playback.play();
        assert_eq!(playback.tick(), Tick::Advanced(1));
        assert_eq!(playback.tick(), Tick::Advanced(2));
        assert_eq!(playback.tick(), Tick::Completed);
        assert!(!playback.is_playing());
        assert_eq!(playback.current_index(), 2);
    }

    #[test]
    fn single_step_trace_completes_immediately() {
        let mut playback = Playback::with_trace(make_trace(1));
        playback.play();
        assert_eq!(playback.tick(), Tick::Completed);
        assert_eq!(playback.progress(), 1.0);
    }

    #[test]
    fn load_resets_state() {
        let mut playback = Playback::with_trace(make_trace(4));
        playback.play();
        playback.seek(3);

        playback.load(make_trace(2));
        assert_eq!(playback.current_index(), 0);
        assert!(!playback.is_playing());
        assert_eq!(playback.trace().len(), 2);
    }

    #[test]
    fn seek_clamps_to_bounds() {
        let mut playback = Playback::with_trace(make_trace(4));
        playback.seek(100);
        assert_eq!(playback.current_index(), 3);
        playback.seek(0);
        assert_eq!(playback.current_index(), 0);
    }

    #[test]
    fn status_snapshot() {
        let mut playback = Playback::with_trace(make_trace(5));
        playback.seek(2);
        playback.set_speed(SpeedLevel::new(5));

        let status = playback.status();
        assert_eq!(status.current_index, 2);
        assert_eq!(status.total_steps, 5);
        assert_eq!(status.speed, SpeedLevel::MAX);
        assert_eq!(status.progress, 0.5);
        assert!(!status.is_playing);
    }
}
