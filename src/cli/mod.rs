use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

use crate::config::{self, MISSING_PARAMS_MESSAGE};

#[derive(Debug, Parser)]
#[command(
    name = "wp_status",
    version,
    about = "Munin plugin reporting WordPress health metrics (run `wp_status config` for graph metadata)"
)]
pub struct Cli {
    /// URL of the endpoint to check
    #[arg(short = 'H', value_name = "URL", allow_hyphen_values = true)]
    pub url: Option<String>,
    /// Value sent verbatim as the Authorization header
    #[arg(short = 'P', value_name = "PASSWORD", allow_hyphen_values = true)]
    pub password: Option<String>,
    /// Log request details to stderr
    #[arg(long)]
    pub verbose: bool,
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

pub const CONFIG_VERB: &str = "config";

pub fn is_config_request(args: &[OsString]) -> bool {
    args.get(1).is_some_and(|arg| arg == CONFIG_VERB)
}

pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if is_config_request(&args) {
        crate::logs::init(false);
        log::debug!("config requested, skipping fetch");
        crate::ui::print_config();
        return Ok(());
    }

    let cli = Cli::parse_from(args);
    crate::logs::init(cli.verbose);
    if !cli.rest.is_empty() {
        log::debug!("ignoring positional arguments: {:?}", cli.rest);
    }

    let cfg = config::from_flags(cli.url, cli.password);
    if !cfg.is_complete() {
        return Err(crate::exit::config_invalid(MISSING_PARAMS_MESSAGE));
    }

    let report = crate::fetch::fetch_status(&cfg.url, &cfg.password)
        .map_err(crate::exit::fetch_failed_err)?;
    crate::ui::print_values(&report);
    Ok(())
}
