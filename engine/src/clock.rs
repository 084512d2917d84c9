use std::time::{Duration, Instant};

/// Fixed-rate tick scheduler.
///
/// Deadlines advance by exactly one interval per tick. When the loop falls behind by a full
/// interval or more the missed deadlines are dropped rather than replayed: the next deadline
/// is rescheduled from `now`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next: Instant,
    last_tick: Option<Instant>,
    ticks: u64,
    dropped: u64,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval: interval.max(Duration::from_micros(1)),
            next: now,
            last_tick: None,
            ticks: 0,
            dropped: 0,
        }
    }

    pub fn from_hz(hz: f64, now: Instant) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / hz.max(1.0)), now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn dropped_ticks(&self) -> u64 {
        self.dropped
    }

    /// Consumes the current deadline if it has passed.
    ///
    /// Returns the wall-clock time since the previous tick (one interval for the first tick),
    /// or `None` if the deadline is still in the future.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.is_due(now) {
            return None;
        }

        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(self.interval);

        let late_by = now.saturating_duration_since(self.next);
        if late_by >= self.interval {
            let missed = (late_by.as_nanos() / self.interval.as_nanos()) as u64;
            self.dropped = self.dropped.saturating_add(missed);
            self.next = now + self.interval;
        } else {
            self.next += self.interval;
        }

        self.last_tick = Some(now);
        self.ticks += 1;
        Some(dt)
    }
}
