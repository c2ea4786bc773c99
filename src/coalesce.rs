//! Debouncing: collapsing bursts of triggers into a single action.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Which end of a burst runs the action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Edge {
    /// Run the most recent action once the burst has been quiet for the period.
    #[default]
    Trailing,
    /// Run the first action immediately and swallow the rest of the burst.
    Leading,
}

/// A single pending-action slot.
///
/// Each [`trigger`](Coalescer::trigger) supersedes the previous one and restarts
/// the quiet period, so only one action per burst ever runs. Timers are tokio
/// tasks; outside a runtime trailing actions run immediately instead.
#[derive(Debug)]
pub struct Coalescer {
    quiet: Duration,
    edge: Edge,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Coalescer {
    /// A trailing-edge coalescer.
    pub fn new(quiet: Duration) -> Self {
        Self::with_edge(quiet, Edge::Trailing)
    }

    pub fn with_edge(quiet: Duration, edge: Edge) -> Self {
        Self {
            quiet,
            edge,
            pending: Mutex::new(None),
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Whether a timer is running: an action waiting to fire on the trailing
    /// edge, or an open window on the leading edge.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Schedules `action`, replacing whatever was pending.
    pub fn trigger<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(runtime) = Handle::try_current() else {
            // No window can be tracked, so both edges fire inline.
            tracing::warn!("no async runtime; running coalesced action immediately");
            action();
            return;
        };

        let mut pending = self.pending.lock();
        let window_open = pending.as_ref().is_some_and(|handle| !handle.is_finished());
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let quiet = self.quiet;
        match self.edge {
            Edge::Trailing => {
                *pending = Some(runtime.spawn(async move {
                    tokio::time::sleep(quiet).await;
                    action();
                }));
            }
            Edge::Leading => {
                *pending = Some(runtime.spawn(tokio::time::sleep(quiet)));
                drop(pending);
                if !window_open {
                    action();
                }
            }
        }
    }

    /// Drops the pending action. Returns `true` if one was still waiting.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }
}

impl Drop for Coalescer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
