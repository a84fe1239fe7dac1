// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Entry point for the accessprof command-line tool.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use std::io;

use accessprof::cli::{self, Cli};
use accessprof::config::ProfileConfig;
use clap::Parser;
use env_logger::Env;

fn init_logging(default_filter: &str, verbose: bool) {
    let filter = if verbose { "debug" } else { default_filter };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(filter));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn main() {
    let args = Cli::parse();
    let config = ProfileConfig::default().with_profile_path(args.profile.clone());
    init_logging(&config.log_filter, args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli::run(&config, &args.command, &mut out) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
