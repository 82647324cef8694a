// auto.rs - Cancellable periodic stepping task
//
// A tokio task ticks at a fixed period and posts a message per tick. The
// grid never leaves the UI thread: the owner drains the queued ticks and
// steps once for each of them.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Called from the timer task after every tick, e.g. to wake the UI.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

struct Ticker {
    task: JoinHandle<()>,
    ticks: UnboundedReceiver<()>,
}

/// At most one running ticker.
pub struct AutoStepper {
    runtime: Handle,
    period: Duration,
    ticker: Option<Ticker>,
}

impl AutoStepper {
    /// A zero `period` is raised to one millisecond.
    pub fn new(runtime: Handle, period: Duration) -> Self {
        Self {
            runtime,
            period: period.max(Duration::from_millis(1)),
            ticker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts ticking, replacing any ticker already running.
    pub fn start(&mut self, waker: Waker) {
        self.stop();

        let (tx, ticks) = mpsc::unbounded_channel();
        let period = self.period;
        let task = self.runtime.spawn(async move {
            // First tick one period from now, not immediately.
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break; // receiver dropped by stop()
                }
                waker();
            }
        });

        log::info!("auto stepping started ({} ms period)", period.as_millis());
        self.ticker = Some(Ticker { task, ticks });
    }

    /// Stops ticking. Ticks already queued are discarded.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.task.abort();
            drop(ticker.ticks);
            log::info!("auto stepping stopped");
        }
    }

    /// Starts if stopped, stops if running. Returns the new running state.
    pub fn toggle(&mut self, waker: Waker) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start(waker);
        }
        self.is_running()
    }

    /// Number of ticks delivered since the last call.
    pub fn take_ticks(&mut self) -> usize {
        let Some(ticker) = self.ticker.as_mut() else {
            return 0;
        };
        let mut count = 0;
        while ticker.ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

impl Drop for AutoStepper {
    fn drop(&mut self) {
        self.stop();
    }
}
