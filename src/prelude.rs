//! Convenience re-exports for common usage.

pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::executor::{SequentialExecutor, Task, TaskId};
