//! SEQEXEC - Sequential Task Executor
//!
//! A single background worker thread runs submitted closures strictly in
//! submission order while any number of threads submit work concurrently.
//!
//! # Quick Start
//!
//! ```no_run
//! use seqexec::SequentialExecutor;
//!
//! let executor = SequentialExecutor::new();
//!
//! executor.execute(|| println!("runs first")).unwrap();
//! executor.execute(|| println!("runs second")).unwrap();
//!
//! // Blocks until the worker thread has exited.
//! executor.shutdown();
//! ```
//!
//! # Guarantees
//!
//! - **FIFO**: tasks run in the order they were appended to the queue
//! - **No overlap**: exactly one task runs at a time
//! - **Failure isolation**: a panicking task is caught and logged; the
//!   next task still runs
//! - **Fire-and-forget**: submission returns immediately and there is no
//!   channel to observe a task's completion or failure
//!
//! Shutdown abandons queued-but-unstarted tasks; draining the queue on
//! shutdown is deliberately out of scope.

// Lint configuration
#![warn(missing_docs, missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod executor;
pub mod prelude;

// Re-export key types at crate root
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use executor::{SequentialExecutor, Task, TaskId};
