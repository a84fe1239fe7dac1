// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Command-line arguments for the accessprof tool.
// Author: Lukas Bower

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// accessprof command-line arguments.
#[derive(Debug, Parser)]
#[command(author = "Lukas Bower", version, about = "Access profile checker", long_about = None)]
pub struct Cli {
    /// Profile to load; defaults to $ACCESSPROF_PROFILE or /etc/accessprof/profile.
    #[arg(long, short = 'p', value_name = "FILE", global = true)]
    pub profile: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the profile and report skipped lines or conflicts.
    Check,
    /// Print the deny and allow tables as JSON.
    Show,
    /// Print the deny and allow permission for one group and target path.
    Lookup {
        /// Executable list, e.g. `[/usr/bin/a, /usr/bin/b]`.
        #[arg(long, short = 'g')]
        group: String,
        /// Target path.
        #[arg(long)]
        path: String,
    },
}
