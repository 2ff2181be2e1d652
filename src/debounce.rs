use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Last-write-wins debouncer
///
/// Only the newest pending value is kept. It is released once `delay` has
/// passed without another push.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the quiet period
    pub fn push(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            debug!("Superseding pending debounced value");
        }
        self.pending = Some((value, now + self.delay));
    }

    /// When the pending value becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Take the pending value if its quiet period is over
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(due) if due <= now => self.flush(),
            _ => None,
        }
    }

    /// Take the pending value regardless of timing
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

/// Forward values from `input` to `output`, debounced
///
/// When `input` closes, a still-pending value is forwarded immediately.
pub fn spawn_debounced<T: Send + 'static>(
    delay: Duration,
    mut input: mpsc::UnboundedReceiver<T>,
    output: mpsc::UnboundedSender<T>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut debouncer = Debouncer::new(delay);

        loop {
            let deadline = debouncer.deadline();
            tokio::select! {
                received = input.recv() => match received {
                    Some(value) => debouncer.push(value, Instant::now()),
                    None => {
                        if let Some(value) = debouncer.flush() {
                            let _ = output.send(value);
                        }
                        break;
                    }
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(value) = debouncer.poll(Instant::now()) {
                        if output.send(value).is_err() {
                            break;
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_waits_for_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push("v", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), Some("v"));
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_push_supersedes_and_restarts_timer() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push("v", start);
        debouncer.push("vi", start + Duration::from_millis(200));
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("vi"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_commits_only_latest() {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (output_tx, mut output_rx) = mpsc::unbounded_channel();
        let handle = spawn_debounced(Duration::from_millis(300), input_rx, output_tx);

        let start = Instant::now();
        for term in ["v", "vi", "vil", "villa"] {
            input_tx.send(term.to_string()).unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        assert_eq!(output_rx.recv().await.as_deref(), Some("villa"));
        assert!(start.elapsed() >= Duration::from_millis(450));
        assert!(output_rx.try_recv().is_err());

        drop(input_tx);
        handle.await.unwrap();
        assert!(output_rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_flushes_on_close() {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (output_tx, mut output_rx) = mpsc::unbounded_channel();
        let handle = spawn_debounced(Duration::from_secs(10), input_rx, output_tx);

        input_tx.send(1).unwrap();
        input_tx.send(2).unwrap();
        drop(input_tx);
        handle.await.unwrap();

        assert_eq!(output_rx.recv().await, Some(2));
        assert_eq!(output_rx.recv().await, None);
    }
}
