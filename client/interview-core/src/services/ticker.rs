use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use super::session_service::Session;
use crate::models::timer::TimerEvent;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Cancellable periodic driver for a session clock.
///
/// Exactly one ticker should be live per session. The loop stops on its own
/// once the session closes or the budget reaches zero; dropping the ticker
/// (or calling `shutdown`) aborts it early so no recurring work leaks past
/// the session's lifetime.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(session: Arc<Mutex<Session>>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                sleep(interval).await;
                let mut guard = session.lock().await;
                match guard.tick() {
                    Some(TimerEvent::TimeExpired(_)) => {
                        tracing::info!("Timer expired: session={}", guard.id());
                        break;
                    }
                    Some(TimerEvent::TimerTick(tick)) => {
                        tracing::trace!(
                            "Timer tick: session={}, remaining={}s",
                            guard.id(),
                            tick.remaining_seconds
                        );
                    }
                    // closed or already expired
                    None => break,
                }
            }
        });
        Self { handle }
    }

    pub fn shutdown(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Stream of timer events for a session, one per interval, ending after the
/// single `TimeExpired` event (or immediately once the session is closed).
pub fn timer_stream(
    session: Arc<Mutex<Session>>,
    interval: Duration,
) -> impl Stream<Item = TimerEvent> {
    stream::unfold((session, false), move |(session, done)| async move {
        if done {
            return None;
        }
        sleep(interval).await;
        let event = session.lock().await.tick()?;
        let done = event.is_expired();
        Some((event, (session, done)))
    })
}
