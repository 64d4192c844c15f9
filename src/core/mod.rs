mod metric;
mod report;

pub use metric::{Metric, MetricValue};
pub use report::StatusReport;
