//! The one-second match clock.
//!
//! The clock owns a single spawned tick task. Ticks are messages on an
//! unbounded channel, so the event loop applies them between key events
//! and nothing races the scoreboard state. `start` cancels any task
//! already live before spawning a fresh one, `stop` cancels outright,
//! and drop cancels whatever is left, so exactly one tick source can
//! ever exist.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::constants::clock::TICK_INTERVAL_MS;

/// One elapsed second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick;

/// Owner of the repeating tick task.
#[derive(Debug, Default)]
pub struct MatchClock {
    task: Option<JoinHandle<()>>,
}

impl MatchClock {
    pub fn new() -> Self {
        Self { task: None }
    }

    /// Whether a tick task is currently live.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Spawn the tick task, replacing any task already running.
    pub fn start(&mut self, ticks: mpsc::UnboundedSender<ClockTick>) {
        self.stop();
        debug!("Match clock started");
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
            // The first interval fire is immediate; swallow it so the
            // first tick lands one full second after starting.
            interval.tick().await;
            loop {
                interval.tick().await;
                if ticks.send(ClockTick).is_err() {
                    // Receiver gone; the session is shutting down.
                    break;
                }
            }
        }));
    }

    /// Cancel the tick task if one is live.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Match clock stopped");
        }
    }
}

impl Drop for MatchClock {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::UnboundedReceiver;

    /// Let the tick task flush everything due, then count what arrived.
    async fn drain(rx: &mut UnboundedReceiver<ClockTick>) -> usize {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        let mut count = 0;
        while rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_tick_per_second() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = MatchClock::new();
        clock.start(tx);

        // Nothing arrives before a full second has passed
        assert_eq!(drain(&mut rx).await, 0);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(drain(&mut rx).await, 1);

        tokio::time::advance(Duration::from_secs(3)).await;
        assert_eq!(drain(&mut rx).await, 3);

        clock.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_the_tick_source() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = MatchClock::new();

        clock.start(tx.clone());
        assert_eq!(drain(&mut rx).await, 0);
        // Restarting must not leave two tasks ticking
        clock.start(tx);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(drain(&mut rx).await, 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(drain(&mut rx).await, 2);

        clock.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_the_clock() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = MatchClock::new();
        clock.start(tx);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(drain(&mut rx).await, 2);
        assert!(clock.is_running());

        clock.stop();
        assert!(!clock.is_running());

        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(drain(&mut rx).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_the_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut clock = MatchClock::new();
            clock.start(tx);
            assert_eq!(drain(&mut rx).await, 0);
        }

        tokio::time::advance(Duration::from_secs(3)).await;
        assert_eq!(drain(&mut rx).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_ends_when_receiver_is_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut clock = MatchClock::new();
        clock.start(tx);
        drop(rx);

        tokio::time::advance(Duration::from_secs(1)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        assert!(!clock.is_running());
    }

    #[tokio::test]
    async fn test_new_clock_is_idle() {
        let clock = MatchClock::new();
        assert!(!clock.is_running());
    }
}
