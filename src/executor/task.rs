//! Task representation and execution.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global task ID counter
static TASK_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a task.
///
/// Used only to correlate log lines; it is never a scheduling input and
/// never a channel for observing a task's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    fn next() -> Self {
        TaskId(TASK_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A caller-supplied unit of work: a boxed closure taking no arguments
/// and returning nothing.
///
/// Immutable once submitted. Carries no priority and no deadline; the
/// only scheduling input is its position in the queue.
pub struct Task {
    id: TaskId,
    func: Box<dyn FnOnce() + Send + 'static>,
}

impl Task {
    /// Wrap a closure into a task.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Task {
            id: TaskId::next(),
            func: Box::new(f),
        }
    }

    /// The task's identifier.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Execute the task
    pub(crate) fn run(self) {
        (self.func)();
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("id", &self.id).finish()
    }
}
