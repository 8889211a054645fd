//! Countdown state derived from the backend's attendance status.
//!
//! The backend's `segundos_restantes` is authoritative only when fetched;
//! between fetches a local ticker decrements it once per period purely for
//! display. Every new status replaces the local value.

use crate::core::lifetime::ScreenLifetime;
use crate::models::{AttendanceStatus, MarkType};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownState {
    /// No open entry today.
    #[default]
    Idle,
    /// Open entry, seconds left in the shift.
    Counting(u32),
    /// Open entry, shift already over.
    Expired,
}

impl CountdownState {
    pub fn from_status(status: &AttendanceStatus) -> Self {
        if !status.has_open_entry {
            return CountdownState::Idle;
        }
        if status.seconds_remaining <= 0 {
            return CountdownState::Expired;
        }
        CountdownState::Counting(u32::try_from(status.seconds_remaining).unwrap_or(u32::MAX))
    }

    /// One period elapsed.
    pub fn tick(self) -> Self {
        match self {
            CountdownState::Counting(n) if n > 1 => CountdownState::Counting(n - 1),
            CountdownState::Counting(_) => CountdownState::Expired,
            other => other,
        }
    }

    /// Seconds shown on screen; never negative.
    pub fn seconds(self) -> u32 {
        match self {
            CountdownState::Counting(n) => n,
            _ => 0,
        }
    }

    pub fn has_open_entry(self) -> bool {
        !matches!(self, CountdownState::Idle)
    }

    pub fn entry_enabled(self) -> bool {
        matches!(self, CountdownState::Idle)
    }

    pub fn exit_enabled(self) -> bool {
        self.has_open_entry()
    }

    pub fn allows(self, kind: MarkType) -> bool {
        match kind {
            MarkType::Entrada => self.entry_enabled(),
            MarkType::Salida => self.exit_enabled(),
        }
    }
}

/// Running countdown task. Aborted on [`TimerHandle::cancel`] or drop.
#[derive(Debug)]
pub struct TimerHandle {
    handle: JoinHandle<()>,
}

impl TimerHandle {
    pub fn cancel(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Owns the countdown state and at most one ticker.
#[derive(Debug)]
pub struct Reconciler {
    state: Arc<watch::Sender<CountdownState>>,
    timer: Option<TimerHandle>,
    period: Duration,
    lifetime: ScreenLifetime,
}

impl Reconciler {
    pub fn new(period: Duration, lifetime: ScreenLifetime) -> Self {
        let (tx, _rx) = watch::channel(CountdownState::Idle);
        Self {
            state: Arc::new(tx),
            timer: None,
            period,
            lifetime,
        }
    }

    pub fn state(&self) -> CountdownState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state.subscribe()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Replace the local countdown with the one implied by `status`.
    ///
    /// Any previous ticker is cancelled first; a new one starts only while
    /// counting and while the screen is mounted. Must run inside a Tokio
    /// runtime.
    pub fn apply(&mut self, status: &AttendanceStatus) -> CountdownState {
        self.stop();

        let next = CountdownState::from_status(status);
        self.state.send_replace(next);
        debug!(?next, "countdown reconciled");

        if matches!(next, CountdownState::Counting(_)) && self.lifetime.is_mounted() {
            self.timer = Some(self.spawn_ticker());
        }
        next
    }

    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    fn spawn_ticker(&self) -> TimerHandle {
        let state = Arc::clone(&self.state);
        let lifetime = self.lifetime.clone();
        let period = self.period;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if !lifetime.is_mounted() {
                    debug!("screen gone, countdown stopped");
                    break;
                }

                let mut finished = false;
                state.send_modify(|s| {
                    *s = s.tick();
                    finished = !matches!(s, CountdownState::Counting(_));
                });
                if finished {
                    debug!("countdown reached zero");
                    break;
                }
            }
        });

        TimerHandle { handle }
    }
}

impl Drop for Reconciler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(open: bool, secs: i64) -> AttendanceStatus {
        AttendanceStatus {
            has_open_entry: open,
            seconds_remaining: secs,
            ..AttendanceStatus::default()
        }
    }

    #[test]
    fn from_status_covers_every_state() {
        assert_eq!(CountdownState::from_status(&status(false, 100)), CountdownState::Idle);
        assert_eq!(CountdownState::from_status(&status(true, 0)), CountdownState::Expired);
        assert_eq!(CountdownState::from_status(&status(true, -5)), CountdownState::Expired);
        assert_eq!(
            CountdownState::from_status(&status(true, 42)),
            CountdownState::Counting(42)
        );
    }

    #[test]
    fn tick_never_goes_below_zero() {
        let mut s = CountdownState::Counting(2);
        s = s.tick();
        assert_eq!(s, CountdownState::Counting(1));
        s = s.tick();
        assert_eq!(s, CountdownState::Expired);
        s = s.tick();
        assert_eq!(s, CountdownState::Expired);
        assert_eq!(s.seconds(), 0);
        assert_eq!(CountdownState::Idle.tick(), CountdownState::Idle);
    }

    #[test]
    fn mark_permissions_follow_state() {
        assert!(CountdownState::Idle.allows(MarkType::Entrada));
        assert!(!CountdownState::Idle.allows(MarkType::Salida));
        assert!(!CountdownState::Counting(5).allows(MarkType::Entrada));
        assert!(CountdownState::Counting(5).allows(MarkType::Salida));
        assert!(CountdownState::Expired.allows(MarkType::Salida));
        assert!(!CountdownState::Expired.allows(MarkType::Entrada));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_only_runs_while_counting() {
        let life = ScreenLifetime::new();
        life.mount();
        let mut rec = Reconciler::new(Duration::from_secs(1), life);

        rec.apply(&status(true, 10));
        assert!(rec.timer_running());

        rec.apply(&status(false, 0));
        assert!(!rec.timer_running());
        assert_eq!(rec.state(), CountdownState::Idle);

        rec.apply(&status(true, 0));
        assert!(!rec.timer_running());
    }

    #[tokio::test(start_paused = true)]
    async fn unmounted_screen_never_starts_a_ticker() {
        let life = ScreenLifetime::new();
        let mut rec = Reconciler::new(Duration::from_secs(1), life);
        assert_eq!(rec.apply(&status(true, 10)), CountdownState::Counting(10));
        assert!(!rec.timer_running());
    }
}
