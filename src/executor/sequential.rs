//! The executor object: queue ownership, lifecycle and shutdown.

use super::task::Task;
use super::worker::Worker;
use crate::config::Config;
use crate::error::{Error, Result};
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Lifecycle of the executor; governs whether submissions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    Running,
    ShuttingDown,
    Disposed,
}

// The queue and the lifecycle flag share one mutex, and the condvar
// waits on that same mutex. Checking emptiness and blocking are
// therefore atomic with respect to producers.
pub(crate) struct Shared {
    pub queue: VecDeque<Task>,
    pub lifecycle: Lifecycle,
}

pub(crate) struct Inner {
    pub shared: Mutex<Shared>,
    pub work_available: Condvar,
}

impl Inner {
    fn new() -> Self {
        Self {
            shared: Mutex::new(Shared {
                queue: VecDeque::new(),
                lifecycle: Lifecycle::Running,
            }),
            work_available: Condvar::new(),
        }
    }
}

/// Runs submitted tasks on a single background thread, strictly in
/// submission order.
///
/// Any number of threads may submit concurrently; the worker thread is
/// the sole consumer, so no two tasks ever run at the same time.
/// Submission is fire-and-forget: it returns as soon as the task is
/// queued and there is no way to observe the task's completion or
/// failure afterwards. A panicking task is caught inside the worker and
/// the next task still runs.
///
/// [`shutdown`](Self::shutdown) stops the worker without draining the
/// queue; tasks that were queued but never started are discarded.
pub struct SequentialExecutor {
    inner: Arc<Inner>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl SequentialExecutor {
    /// Create an executor and start its worker thread.
    ///
    /// Never blocks. Panics only if the OS refuses to spawn a thread,
    /// the same failure mode as [`std::thread::spawn`]; use
    /// [`with_config`](Self::with_config) to handle spawn errors.
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("failed to spawn executor worker thread")
    }

    /// Create an executor with the given worker thread configuration.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the configuration is invalid,
    /// [`Error::Executor`] if the worker thread could not be spawned.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let inner = Arc::new(Inner::new());
        let worker = Worker::new(inner.clone());

        let mut builder = thread::Builder::new().name(config.thread_name);
        if let Some(stack_size) = config.stack_size {
            builder = builder.stack_size(stack_size);
        }

        let handle = builder
            .spawn(move || worker.run())
            .map_err(|e| Error::executor(format!("spawn failed: {}", e)))?;

        Ok(Self {
            inner,
            worker: Mutex::new(Some(handle)),
        })
    }

    /// Queue a task to run after all previously queued tasks.
    ///
    /// Accepts anything convertible into `Option<Task>`, so call sites
    /// that resolve a task dynamically can pass the lookup result
    /// straight through; an absent task is rejected rather than
    /// silently ignored.
    ///
    /// Returns as soon as the task is queued. Submissions from one
    /// thread run in that thread's submission order; the interleaving
    /// across threads is whatever order their enqueues won the lock.
    ///
    /// # Errors
    ///
    /// [`Error::AbsentTask`] if `task` is `None`, [`Error::Shutdown`]
    /// if [`shutdown`](Self::shutdown) was already requested. In both
    /// cases the queue is untouched.
    pub fn submit(&self, task: impl Into<Option<Task>>) -> Result<()> {
        let task = match task.into() {
            Some(task) => task,
            None => return Err(Error::AbsentTask),
        };

        let mut shared = self.inner.shared.lock();
        if shared.lifecycle != Lifecycle::Running {
            return Err(Error::Shutdown);
        }
        shared.queue.push_back(task);
        drop(shared);

        self.inner.work_available.notify_one();
        Ok(())
    }

    /// Wrap a closure in a [`Task`] and queue it.
    ///
    /// # Errors
    ///
    /// [`Error::Shutdown`] if [`shutdown`](Self::shutdown) was already
    /// requested.
    pub fn execute<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.submit(Task::new(f))
    }

    /// Number of tasks queued but not yet started.
    pub fn pending_tasks(&self) -> usize {
        self.inner.shared.lock().queue.len()
    }

    /// Stop the worker and block until its thread has exited.
    ///
    /// Idempotent: any number of calls, concurrent or sequential,
    /// perform exactly one shutdown. The currently running task is
    /// allowed to finish; tasks still queued when the worker exits are
    /// discarded without running. Once this returns, the worker thread
    /// has terminated and no task will run afterwards.
    ///
    /// Calling this from inside a task deadlocks: the worker would be
    /// joining itself.
    pub fn shutdown(&self) {
        {
            let mut shared = self.inner.shared.lock();
            if shared.lifecycle == Lifecycle::Running {
                shared.lifecycle = Lifecycle::ShuttingDown;
            }
        }
        self.inner.work_available.notify_one();

        // The first caller takes the handle and joins. Concurrent
        // callers block on the handle mutex until the join completes;
        // later callers find the handle gone and return at once.
        let mut worker = self.worker.lock();
        if let Some(handle) = worker.take() {
            let _ = handle.join();

            let mut shared = self.inner.shared.lock();
            let abandoned = shared.queue.len();
            if abandoned > 0 {
                tracing::debug!(abandoned, "discarding queued tasks");
            }
            shared.queue.clear();
            shared.lifecycle = Lifecycle::Disposed;
        }
    }
}

impl Default for SequentialExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SequentialExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.inner.shared.lock();
        f.debug_struct("SequentialExecutor")
            .field("lifecycle", &shared.lifecycle)
            .field("pending_tasks", &shared.queue.len())
            .finish()
    }
}

impl Drop for SequentialExecutor {
    fn drop(&mut self) {
        if self.worker.get_mut().is_some() {
            tracing::warn!("executor dropped without shutdown; joining worker");
            self.shutdown();
        }
    }
}
