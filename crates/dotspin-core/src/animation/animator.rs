//! Frame-driven integer animator

use std::fmt;
use std::time::Duration;

use super::interpolator::{LinearInterpolator, TimeInterpolator};

/// Duration used when none is set
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Callback invoked with the animated value on every frame
pub type UpdateListener = Box<dyn FnMut(i32)>;

/// How many times the animation repeats after its first cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    Infinite,
    Finite(u32),
}

/// What happens at a cycle boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Jump back to the start value
    #[default]
    Restart,
    /// Play the next cycle backwards
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Running,
    Paused,
    Ended,
}

/// Animates an integer across the closed range `[from, to]`
///
/// The animator owns no clock. The host calls [`IntAnimator::do_frame`]
/// with monotonic frame timestamps; the first frame after [`start`] latches
/// the start time. Every integer in the range gets an equal share of the
/// cycle, so with linear pacing and at least one frame per share the value
/// walks through each integer once per cycle.
///
/// [`start`]: IntAnimator::start
pub struct IntAnimator {
    from: i32,
    to: i32,
    duration: Duration,
    repeat_count: RepeatCount,
    repeat_mode: RepeatMode,
    interpolator: Box<dyn TimeInterpolator>,
    state: RunState,
    start_time: Option<Duration>,
    last_frame: Option<Duration>,
    /// Elapsed time carried over a pause, applied when the next frame latches
    resume_offset: Duration,
    value: i32,
    listeners: Vec<UpdateListener>,
}

impl IntAnimator {
    pub fn new(from: i32, to: i32) -> Self {
        Self {
            from,
            to,
            duration: DEFAULT_DURATION,
            repeat_count: RepeatCount::Finite(0),
            repeat_mode: RepeatMode::Restart,
            interpolator: Box::new(LinearInterpolator),
            state: RunState::Idle,
            start_time: None,
            last_frame: None,
            resume_offset: Duration::ZERO,
            value: from,
            listeners: Vec::new(),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_repeat_count(mut self, count: RepeatCount) -> Self {
        self.repeat_count = count;
        self
    }

    pub fn with_repeat_mode(mut self, mode: RepeatMode) -> Self {
        self.repeat_mode = mode;
        self
    }

    pub fn with_interpolator(mut self, interpolator: impl TimeInterpolator + 'static) -> Self {
        self.interpolator = Box::new(interpolator);
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn repeat_count(&self) -> RepeatCount {
        self.repeat_count
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn add_update_listener(&mut self, listener: impl FnMut(i32) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn remove_all_update_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Value computed by the most recent frame
    pub fn animated_value(&self) -> i32 {
        self.value
    }

    /// Start from the beginning, discarding any progress
    pub fn start(&mut self) {
        self.state = RunState::Running;
        self.start_time = None;
        self.last_frame = None;
        self.resume_offset = Duration::ZERO;
        self.value = self.from;
        tracing::debug!(
            from = self.from,
            to = self.to,
            duration_ms = self.duration.as_millis() as u64,
            "Animator started"
        );
    }

    /// Freeze progress until [`IntAnimator::resume`]
    pub fn pause(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.resume_offset = match (self.start_time, self.last_frame) {
            (Some(start), Some(last)) => last.saturating_sub(start),
            _ => self.resume_offset,
        };
        self.start_time = None;
        self.state = RunState::Paused;
        tracing::debug!(elapsed = ?self.resume_offset, "Animator paused");
    }

    /// Continue a paused animation, or start one that is not running
    pub fn resume(&mut self) {
        match self.state {
            RunState::Running => {}
            RunState::Paused => {
                self.state = RunState::Running;
                tracing::debug!(elapsed = ?self.resume_offset, "Animator resumed");
            }
            RunState::Idle | RunState::Ended => self.start(),
        }
    }

    /// Stop without notifying listeners again
    pub fn cancel(&mut self) {
        if self.state == RunState::Idle {
            return;
        }
        self.state = RunState::Idle;
        self.start_time = None;
        self.last_frame = None;
        self.resume_offset = Duration::ZERO;
        tracing::debug!("Animator cancelled");
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    /// Running or paused
    pub fn is_started(&self) -> bool {
        matches!(self.state, RunState::Running | RunState::Paused)
    }

    pub fn has_ended(&self) -> bool {
        self.state == RunState::Ended
    }

    /// Advance to `frame_time` and notify listeners
    ///
    /// Returns `true` while the animation keeps running after this frame.
    pub fn do_frame(&mut self, frame_time: Duration) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        let offset = self.resume_offset;
        let start = *self
            .start_time
            .get_or_insert_with(|| frame_time.saturating_sub(offset));
        self.resume_offset = Duration::ZERO;
        self.last_frame = Some(frame_time);

        let elapsed = frame_time.saturating_sub(start);
        let (fraction, finished) = self.cycle_fraction(elapsed);
        self.value = self.evaluate(self.interpolator.interpolation(fraction));
        tracing::trace!(value = self.value, ?elapsed, "Animator frame");

        let value = self.value;
        for listener in &mut self.listeners {
            listener(value);
        }

        if finished {
            self.state = RunState::Ended;
            tracing::debug!(value, "Animator ended");
        }
        !finished
    }

    /// Fraction of the current cycle and whether the animation is over
    fn cycle_fraction(&self, elapsed: Duration) -> (f32, bool) {
        let finite = match self.repeat_count {
            RepeatCount::Infinite => None,
            RepeatCount::Finite(n) => Some(u128::from(n)),
        };

        if self.duration.is_zero() {
            return (1.0, finite.is_some());
        }

        let duration = self.duration.as_nanos();
        let elapsed = elapsed.as_nanos();
        let iteration = elapsed / duration;

        if let Some(repeats) = finite {
            if iteration > repeats {
                let ends_reversed = self.repeat_mode == RepeatMode::Reverse && repeats % 2 == 1;
                return (if ends_reversed { 0.0 } else { 1.0 }, true);
            }
        }

        let mut fraction = (elapsed % duration) as f64 / duration as f64;
        if self.repeat_mode == RepeatMode::Reverse && iteration % 2 == 1 {
            fraction = 1.0 - fraction;
        }
        (fraction as f32, false)
    }

    fn evaluate(&self, progress: f32) -> i32 {
        let span = i64::from(self.to) - i64::from(self.from);
        let steps = span.abs() + 1;
        let offset = (f64::from(progress) * steps as f64).floor() as i64;
        let offset = offset.clamp(0, steps - 1);
        (i64::from(self.from) + span.signum() * offset) as i32
    }
}

impl fmt::Debug for IntAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntAnimator")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("repeat_count", &self.repeat_count)
            .field("repeat_mode", &self.repeat_mode)
            .field("interpolator", &self.interpolator)
            .field("state", &self.state)
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
