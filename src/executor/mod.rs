//! Task execution infrastructure.
//!
//! This module provides the executor object, its task representation and
//! the single worker thread that drains the queue.

pub mod sequential;
pub mod task;

pub(crate) mod worker;

pub use sequential::SequentialExecutor;
pub use task::{Task, TaskId};
