use std::time::{Duration, Instant};

/// Timing for one paced frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous frame, clamped.
    pub dt: f32,
    pub frame_index: u64,
}

/// Fixed-rate frame pacer.
///
/// Sleeps until the next deadline, then reports clamped delta time. A frame
/// that overruns its deadline resets the schedule instead of bursting to
/// catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last: Instant,
    next: Instant,
    frame_index: u64,
    dt_max: Duration,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            interval,
            last: now,
            next: now,
            frame_index: 0,
            dt_max: Duration::from_millis(250),
        }
    }

    pub fn wait(&mut self) -> FrameTime {
        let now = Instant::now();
        if let Some(remaining) = self.next.checked_duration_since(now) {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        self.next += self.interval;
        if self.next < now {
            self.next = now + self.interval;
        }

        let ft = FrameTime { dt: dt.as_secs_f32(), frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_count_up_and_respect_interval() {
        let mut pacer = FramePacer::new(Duration::from_millis(2));
        let start = Instant::now();
        let a = pacer.wait();
        let b = pacer.wait();
        let c = pacer.wait();
        assert_eq!((a.frame_index, b.frame_index, c.frame_index), (0, 1, 2));
        assert!(start.elapsed() >= Duration::from_millis(4));
        assert!(c.dt <= 0.25);
    }
}
