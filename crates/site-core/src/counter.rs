//! One-shot "count up" animation for the stat numbers.

use smallvec::SmallVec;
use std::time::Duration;

/// Run length used when a counter's region scrolls into view.
pub const VISIBLE_RUN_DURATION: Duration = Duration::from_millis(2500);
/// Run length when no duration is configured.
pub const DEFAULT_RUN_DURATION: Duration = Duration::from_millis(500);

/// Exponential ease-out. Exactly 1 at `p == 1`.
#[inline]
pub fn ease_out_expo(p: f64) -> f64 {
    if p >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * p)
    }
}

/// Parse a `data-target` value. Anything missing, blank or non-numeric is 0;
/// fractional input rounds to the nearest integer.
pub fn parse_target(raw: Option<&str>) -> i64 {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => v.round() as i64,
        _ => 0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Full,
    Reduced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountFrame {
    pub value: i64,
    pub done: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct CountAnimation {
    pub target: i64,
    pub duration: Duration,
    ease: fn(f64) -> f64,
}

impl CountAnimation {
    pub fn new(target: i64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            ease: ease_out_expo,
        }
    }

    pub fn with_default_duration(target: i64) -> Self {
        Self::new(target, DEFAULT_RUN_DURATION)
    }

    pub fn with_easing(mut self, ease: fn(f64) -> f64) -> Self {
        self.ease = ease;
        self
    }

    /// Normalized time in [0, 1].
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Value to display `elapsed` after the run started. The last frame is the
    /// exact target, whatever rounding did on the way.
    pub fn sample(&self, elapsed: Duration) -> CountFrame {
        let p = self.progress(elapsed);
        if p >= 1.0 {
            return CountFrame {
                value: self.target,
                done: true,
            };
        }
        let value = (self.target as f64 * (self.ease)(p)).round() as i64;
        CountFrame { value, done: false }
    }
}

/// What to do with a counter when its region becomes visible.
#[derive(Clone, Copy, Debug)]
pub enum CounterStart {
    /// Show the final value right away.
    Immediate(i64),
    Animate(CountAnimation),
    /// Already ran.
    Skip,
}

#[derive(Clone, Debug)]
pub struct CounterTarget<E> {
    pub element: E,
    pub target: i64,
    animated: bool,
}

impl<E> CounterTarget<E> {
    pub fn new(element: E, target: i64) -> Self {
        Self {
            element,
            target,
            animated: false,
        }
    }

    pub fn from_attribute(element: E, raw: Option<&str>) -> Self {
        Self::new(element, parse_target(raw))
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn start(&mut self, motion: Motion, duration: Duration) -> CounterStart {
        if self.animated {
            return CounterStart::Skip;
        }
        self.animated = true;
        match motion {
            Motion::Reduced => CounterStart::Immediate(self.target),
            Motion::Full => CounterStart::Animate(CountAnimation::new(self.target, duration)),
        }
    }
}

/// The counters of one observed region, started together.
pub struct CounterAnimator<E> {
    targets: SmallVec<[CounterTarget<E>; 4]>,
    pub duration: Duration,
    pub motion: Motion,
}

impl<E> CounterAnimator<E> {
    pub fn new(motion: Motion) -> Self {
        Self {
            targets: SmallVec::new(),
            duration: VISIBLE_RUN_DURATION,
            motion,
        }
    }

    pub fn push(&mut self, target: CounterTarget<E>) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> &[CounterTarget<E>] {
        &self.targets
    }

    /// Start every counter that has not run yet.
    pub fn trigger(&mut self) -> Vec<(E, CounterStart)>
    where
        E: Clone,
    {
        let (motion, duration) = (self.motion, self.duration);
        self.targets
            .iter_mut()
            .filter_map(|t| match t.start(motion, duration) {
                CounterStart::Skip => None,
                start => Some((t.element.clone(), start)),
            })
            .collect()
    }
}
