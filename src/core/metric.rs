use std::fmt;

/// A value series the plugin reports, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    PluginUpdateCount,
    ThemeUpdateCount,
    CoreUpdateAvailable,
    UnapprovedComments,
    ResponseTimeMs,
    PeakScriptMemoryMb,
    DbQueryCount,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::PluginUpdateCount,
        Metric::ThemeUpdateCount,
        Metric::CoreUpdateAvailable,
        Metric::UnapprovedComments,
        Metric::ResponseTimeMs,
        Metric::PeakScriptMemoryMb,
        Metric::DbQueryCount,
    ];

    pub const fn field_name(self) -> &'static str {
        match self {
            Metric::PluginUpdateCount => "plugin_update_count",
            Metric::ThemeUpdateCount => "theme_update_count",
            Metric::CoreUpdateAvailable => "core_update_available",
            Metric::UnapprovedComments => "unapproved_comments",
            Metric::ResponseTimeMs => "response_time_ms",
            Metric::PeakScriptMemoryMb => "peak_script_memory_mb",
            Metric::DbQueryCount => "db_query_count",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Metric::PluginUpdateCount => "Plugin Updates",
            Metric::ThemeUpdateCount => "Theme Updates",
            Metric::CoreUpdateAvailable => "Core Update Available",
            Metric::UnapprovedComments => "Unapproved Comments",
            Metric::ResponseTimeMs => "Response Time (ms)",
            Metric::PeakScriptMemoryMb => "Peak Script Memory (MB)",
            Metric::DbQueryCount => "DB Query Count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(i64),
    Flag(bool),
    Decimal(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Flag(b) => write!(f, "{b}"),
            // Always two fractional digits.
            MetricValue::Decimal(v) => write!(f, "{v:.2}"),
        }
    }
}
