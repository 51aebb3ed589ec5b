// worker thread stuff
use super::sequential::{Inner, Lifecycle};
use super::task::Task;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

// counters reported when the worker exits
pub(crate) struct WorkerState {
    pub tasks_executed: AtomicU64,
    pub tasks_panicked: AtomicU64,
}

impl WorkerState {
    fn new() -> Self {
        Self {
            tasks_executed: AtomicU64::new(0),
            tasks_panicked: AtomicU64::new(0),
        }
    }
}

pub(crate) struct Worker {
    inner: Arc<Inner>,
    state: WorkerState,
}

impl Worker {
    pub fn new(inner: Arc<Inner>) -> Self {
        Self {
            inner,
            state: WorkerState::new(),
        }
    }

    // main loop
    pub fn run(&self) {
        tracing::debug!(
            thread = thread::current().name().unwrap_or("unnamed"),
            "worker started"
        );

        while let Some(task) = self.next_task() {
            self.execute_task(task);
        }

        tracing::debug!(
            executed = self.state.tasks_executed.load(Ordering::Relaxed),
            panicked = self.state.tasks_panicked.load(Ordering::Relaxed),
            "worker stopped"
        );
    }

    // Blocks until a task is at the head of the queue or shutdown is
    // requested. The emptiness check and the wait both happen under the
    // queue mutex, so a notification between them cannot be lost.
    fn next_task(&self) -> Option<Task> {
        let mut shared = self.inner.shared.lock();

        loop {
            if shared.lifecycle != Lifecycle::Running {
                return None;
            }

            if let Some(task) = shared.queue.pop_front() {
                return Some(task);
            }

            self.inner.work_available.wait(&mut shared);
        }
    }

    fn execute_task(&self, task: Task) {
        let tid = task.id();

        let result = catch_unwind(AssertUnwindSafe(|| {
            task.run();
        }));

        if result.is_err() {
            // The submitter is expected to handle failures inside the
            // task body. A panic that reaches the worker is swallowed
            // and the loop moves on to the next task.
            self.state.tasks_panicked.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(task = ?tid, "task panicked");
        }

        self.state.tasks_executed.fetch_add(1, Ordering::Relaxed);
    }
}
