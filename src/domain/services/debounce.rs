#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Coalesces a stream of values into the last one seen after a fixed quiet
/// period. Each [`Debouncer::push`] supersedes the pending value, and
/// [`Debouncer::cancel`] stops the pending timer so no stale delivery can
/// fire after the owner is gone.
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    tx: mpsc::UnboundedSender<(u64, String)>,
    rx: mpsc::UnboundedReceiver<(u64, String)>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay_millis: u64) -> Debouncer {
        let (tx, rx) = mpsc::unbounded_channel::<(u64, String)>();

        return Debouncer {
            delay: Duration::from_millis(delay_millis),
            generation: 0,
            tx,
            rx,
            pending: None,
        };
    }

    /// Schedules `value` for delivery after the quiet period, replacing any
    /// value that was still waiting.
    pub fn push(&mut self, value: &str) {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();
        let value = value.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send((generation, value));
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        return self.pending.is_some();
    }

    /// Waits for the pending value to settle. Values superseded by a later
    /// push are discarded. Returns `None` when nothing is scheduled.
    pub async fn settle(&mut self) -> Option<String> {
        if self.pending.is_none() {
            return None;
        }

        while let Some((generation, value)) = self.rx.recv().await {
            if generation != self.generation {
                continue;
            }

            self.pending = None;
            return Some(value);
        }

        return None;
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
