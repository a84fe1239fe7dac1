// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Execute accessprof subcommands against a loaded profile.
// Author: Lukas Bower

//! `accessprof` subcommands.

pub mod args;

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::ProfileConfig;
use crate::profile::{GroupKey, Permission, Profile, RuleTable};

pub use args::{Cli, Command};

#[derive(Serialize)]
struct TablesView<'a> {
    deny: &'a RuleTable,
    allow: &'a RuleTable,
}

fn label(permission: Option<Permission>) -> &'static str {
    permission.map_or("-", Permission::label)
}

/// Run `command` against the profile selected by `config`, writing to `out`.
pub fn run<W: Write>(config: &ProfileConfig, command: &Command, out: &mut W) -> Result<()> {
    config.validate()?;
    let path = &config.profile_path;
    let profile = Profile::load(path)
        .with_context(|| format!("failed to load profile {}", path.display()))?;

    match command {
        Command::Check => {
            for diagnostic in profile.diagnostics() {
                writeln!(out, "warning: {diagnostic}")?;
            }
            writeln!(
                out,
                "ok: {} deny group(s), {} allow group(s)",
                profile.deny().len(),
                profile.allow().len()
            )?;
        }
        Command::Show => {
            let view = TablesView {
                deny: profile.deny(),
                allow: profile.allow(),
            };
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
        Command::Lookup { group, path } => {
            let key = GroupKey::from_list(group);
            writeln!(out, "deny: {}", label(profile.deny().lookup(&key, path)))?;
            writeln!(out, "allow: {}", label(profile.allow().lookup(&key, path)))?;
        }
    }
    Ok(())
}
