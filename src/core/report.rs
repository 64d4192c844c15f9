use serde::{Deserialize, Deserializer};

use crate::core::{Metric, MetricValue};

/// Health payload served by the WordPress status endpoint.
///
/// Missing fields, unknown fields and `null`s (for a field or the whole body)
/// decode to zero values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusReport {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wp_status_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub database_access: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub plugin_update_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub theme_update_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub core_update_available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub unapproved_comments: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub response_time_ms: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_script_memory_mb: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub peak_script_memory_mb: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wp_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub php_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub db_query_count: i64,
}

impl StatusReport {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let report: Option<Self> = serde_json::from_slice(body)?;
        Ok(report.unwrap_or_default())
    }

    pub fn value(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::PluginUpdateCount => MetricValue::Count(self.plugin_update_count),
            Metric::ThemeUpdateCount => MetricValue::Count(self.theme_update_count),
            Metric::CoreUpdateAvailable => MetricValue::Flag(self.core_update_available),
            Metric::UnapprovedComments => MetricValue::Count(self.unapproved_comments),
            Metric::ResponseTimeMs => MetricValue::Decimal(self.response_time_ms),
            Metric::PeakScriptMemoryMb => MetricValue::Decimal(self.peak_script_memory_mb),
            Metric::DbQueryCount => MetricValue::Count(self.db_query_count),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
