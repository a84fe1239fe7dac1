// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Root library for the accessprof profile parser and checker.
// Author: Lukas Bower
#![forbid(unsafe_code)]

//! Per-executable filesystem access profiles: parsing into deny/allow rule
//! tables and validation that no target is both denied and allowed.

/// Profile parser, rule tables and conflict checker.
pub mod profile;

/// Environment-driven defaults.
pub mod config;

/// `accessprof` subcommands.
pub mod cli;

pub use profile::{
    Conflict, ConflictReport, Diagnostic, GroupKey, LineError, Permission, Profile, ProfileError,
    RuleTable,
};
