use env_logger::{Builder, Env, Target};

pub const LOG_ENV: &str = "WP_STATUS_LOG";

/// Diagnostics go to stderr; stdout carries only the Munin protocol.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "warn,wp_status=debug" } else { "warn" };
    let _ = Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
