pub mod logger;

pub use logger::{init_logger, init_tracing, LogContext, TimedOperation};
