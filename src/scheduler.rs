use std::time::{Duration, Instant};

/// Two independent fixed cadences over one clock: state updates and redraws.
///
/// Callers pass `now` in, so the scheduler never reads the clock itself.
#[derive(Debug, Clone)]
pub struct Scheduler {
    update_every: Duration,
    render_every: Duration,
    last_update: Instant,
    last_render: Instant,
}

impl Scheduler {
    pub fn new(update_every: Duration, render_every: Duration, now: Instant) -> Self {
        Scheduler { update_every, render_every, last_update: now, last_render: now }
    }

    /// True, and re-armed, once `update_every` has passed since the last update.
    pub fn update_due(&mut self, now: Instant) -> bool {
        Self::due(&mut self.last_update, self.update_every, now)
    }

    /// True, and re-armed, once `render_every` has passed since the last render.
    pub fn render_due(&mut self, now: Instant) -> bool {
        Self::due(&mut self.last_render, self.render_every, now)
    }

    fn due(last: &mut Instant, every: Duration, now: Instant) -> bool {
        if now.saturating_duration_since(*last) >= every {
            *last = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn nothing_due_at_start() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new(100 * MS, 10 * MS, t0);
        assert!(!sched.update_due(t0));
        assert!(!sched.render_due(t0));
    }

    #[test]
    fn cadences_are_independent() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new(100 * MS, 10 * MS, t0);

        let mut updates = 0;
        let mut renders = 0;
        for ms in 1..=300 {
            let now = t0 + ms * MS;
            if sched.update_due(now) {
                updates += 1;
            }
            if sched.render_due(now) {
                renders += 1;
            }
        }

        assert_eq!(updates, 3);
        assert_eq!(renders, 30);
    }

    #[test]
    fn rearms_from_the_observed_time() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new(100 * MS, 10 * MS, t0);

        // A late check fires once, then waits a full interval again.
        assert!(sched.update_due(t0 + 250 * MS));
        assert!(!sched.update_due(t0 + 300 * MS));
        assert!(sched.update_due(t0 + 350 * MS));
    }

    #[test]
    fn earlier_instant_is_never_due() {
        let t0 = Instant::now() + 50 * MS;
        let mut sched = Scheduler::new(100 * MS, 10 * MS, t0);
        assert!(!sched.update_due(t0 - 10 * MS));
    }
}
