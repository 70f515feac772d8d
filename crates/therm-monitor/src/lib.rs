pub mod error;
pub mod monitor;
pub mod report;
pub mod threshold;

pub use error::{MonitorError, Result};
pub use monitor::ThresholdMonitor;
pub use report::{status_line, warning_line, ConsoleReporter, StatusReporter};
pub use threshold::ThresholdPolicy;
