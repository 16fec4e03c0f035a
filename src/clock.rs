use std::time::{Duration, Instant};

/// Fixed-interval gate for gameplay ticks, backed by a monotonic clock.
///
/// Rendering happens every frame; the simulation only advances when
/// [`TickClock::event_triggered`] reports that a full interval has elapsed.
#[derive(Debug)]
pub struct TickClock {
    interval: Duration,
    last_trigger: Instant,
}

impl TickClock {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_trigger: Instant::now(),
        }
    }

    /// Returns true at most once per elapsed interval window since the
    /// last true return.
    pub fn event_triggered(&mut self) -> bool {
        if self.last_trigger.elapsed() >= self.interval {
            self.last_trigger = Instant::now();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::TickClock;

    #[test]
    fn does_not_trigger_before_the_interval_elapses() {
        let mut clock = TickClock::new(Duration::from_secs(3600));
        assert!(!clock.event_triggered());
        assert!(!clock.event_triggered());
    }

    #[test]
    fn triggers_once_per_elapsed_window() {
        let mut clock = TickClock::new(Duration::from_millis(10));

        thread::sleep(Duration::from_millis(15));
        assert!(clock.event_triggered());
        // The window restarted on the trigger above.
        assert!(!clock.event_triggered());
    }
}
