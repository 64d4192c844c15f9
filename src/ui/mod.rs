use anyhow::Error;
use std::io::{self, Write};

use crate::core::{Metric, StatusReport};
use crate::exit::{ExitCode, ExitError};

const GRAPH_HEADER: [(&str, &str); 3] = [
    ("graph_title", "WP Status"),
    ("graph_vlabel", "count"),
    ("graph_category", "wordpress"),
];

pub fn write_config(out: &mut impl Write) -> io::Result<()> {
    for (key, value) in GRAPH_HEADER {
        writeln!(out, "{key} {value}")?;
    }
    for metric in Metric::ALL {
        writeln!(out, "{}.label {}", metric.field_name(), metric.label())?;
    }
    Ok(())
}

pub fn write_values(out: &mut impl Write, report: &StatusReport) -> io::Result<()> {
    for metric in Metric::ALL {
        writeln!(out, "{}.value {}", metric.field_name(), report.value(metric))?;
    }
    Ok(())
}

/// Renders the single stdout line Munin shows for a failed run.
pub fn write_error(out: &mut impl Write, err: &Error) -> io::Result<()> {
    match err.downcast_ref::<ExitError>() {
        Some(exit) if exit.code == ExitCode::ConfigInvalid => writeln!(out, "{:#}", exit.err),
        Some(exit) => writeln!(out, "Error fetching data: {:#}", exit.err),
        None => writeln!(out, "Error fetching data: {err:#}"),
    }
}

pub fn print_config() {
    let mut out = io::stdout().lock();
    let _ = write_config(&mut out);
}

pub fn print_values(report: &StatusReport) {
    let mut out = io::stdout().lock();
    let _ = write_values(&mut out, report);
}

pub fn println_error(err: &Error) {
    let mut out = io::stdout().lock();
    let _ = write_error(&mut out, err);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn config_lines_are_fixed() {
        let out = render(|buf| write_config(buf));
        assert_eq!(
            out,
            "graph_title WP Status\n\
             graph_vlabel count\n\
             graph_category wordpress\n\
             plugin_update_count.label Plugin Updates\n\
             theme_update_count.label Theme Updates\n\
             core_update_available.label Core Update Available\n\
             unapproved_comments.label Unapproved Comments\n\
             response_time_ms.label Response Time (ms)\n\
             peak_script_memory_mb.label Peak Script Memory (MB)\n\
             db_query_count.label DB Query Count\n"
        );
    }

    #[test]
    fn value_lines_follow_metric_order() {
        let report = StatusReport {
            plugin_update_count: 3,
            theme_update_count: 1,
            core_update_available: true,
            unapproved_comments: 5,
            response_time_ms: 123.456,
            peak_script_memory_mb: 64.789,
            db_query_count: 42,
            ..StatusReport::default()
        };
        let out = render(|buf| write_values(buf, &report));
        assert_eq!(
            out,
            "plugin_update_count.value 3\n\
             theme_update_count.value 1\n\
             core_update_available.value true\n\
             unapproved_comments.value 5\n\
             response_time_ms.value 123.46\n\
             peak_script_memory_mb.value 64.79\n\
             db_query_count.value 42\n"
        );
    }

    #[test]
    fn zero_report_renders_zero_values() {
        let out = render(|buf| write_values(buf, &StatusReport::default()));
        assert!(out.contains("core_update_available.value false\n"), "out={out}");
        assert!(out.contains("response_time_ms.value 0.00\n"), "out={out}");
        assert_eq!(out.lines().count(), 7);
    }

    #[test]
    fn config_error_prints_message_only() {
        let err = crate::exit::config_invalid(crate::config::MISSING_PARAMS_MESSAGE);
        let out = render(|buf| write_error(buf, &err));
        assert_eq!(
            out,
            "ERROR: The -H (URL) and -P (password) parameters are required.\n"
        );
    }

    #[test]
    fn fetch_error_is_prefixed_and_single_line() {
        let inner = anyhow::anyhow!("expected value at line 1 column 1")
            .context("failed to decode status payload");
        let err = crate::exit::fetch_failed_err(inner);
        let out = render(|buf| write_error(buf, &err));
        assert_eq!(
            out,
            "Error fetching data: failed to decode status payload: expected value at line 1 column 1\n"
        );
    }

    #[test]
    fn unwrapped_error_is_reported_as_fetch_failure() {
        let err = anyhow::anyhow!("boom");
        let out = render(|buf| write_error(buf, &err));
        assert_eq!(out, "Error fetching data: boom\n");
    }
}
