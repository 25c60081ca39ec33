use keepsake_core::TimerRequest;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs the timers a `Session` asks for and hands each back once it elapses.
///
/// Every request gets its own task; the task sleeps for the request's delay
/// and then sends the request on the channel returned by `channel`.
/// `cancel_all` aborts every outstanding task, and so does dropping the
/// value, so a torn-down screen never hears from its timers.
#[derive(Debug)]
pub struct ScreenTimers {
    sender: mpsc::UnboundedSender<TimerRequest>,
    tasks: Vec<JoinHandle<()>>,
}

impl ScreenTimers {
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender,
                tasks: Vec::new(),
            },
            receiver,
        )
    }

    /// Start a timer. Without a tokio runtime the request is dropped and logged.
    pub fn schedule(&mut self, request: TimerRequest) {
        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(kind = ?request.kind, "no async runtime, timer dropped");
            return;
        };
        self.tasks.retain(|task| !task.is_finished());
        tracing::debug!(
            kind = ?request.kind,
            delay_ms = request.delay.as_millis(),
            generation = request.token.generation(),
            "timer scheduled"
        );
        let sender = self.sender.clone();
        self.tasks.push(handle.spawn(async move {
            tokio::time::sleep(request.delay).await;
            // The receiver is gone once the UI shuts down.
            let _ = sender.send(request);
        }));
    }

    pub fn cancel_all(&mut self) {
        let cancelled = self.tasks.len();
        for task in self.tasks.drain(..) {
            task.abort();
        }
        if cancelled > 0 {
            tracing::debug!(cancelled, "timers cancelled");
        }
    }

    /// Timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for ScreenTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
