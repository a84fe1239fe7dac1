// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Error types produced while loading access profiles.
// Author: Lukas Bower

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::conflict::ConflictReport;

/// Recoverable problem with a single profile line. The line is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Neither a comment, header, blank nor `- <path>: <perm>` rule.
    #[error("unknown line type: {0}")]
    UnknownLineType(String),
    /// Permission token other than `o`, `a`, `oa` or `ao`.
    #[error("unknown permission: {0}")]
    UnknownPermission(String),
}

/// Fatal errors returned by profile loading.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("rule on line {line} appears before any deny/allow header")]
    RuleBeforeHeader { line: usize },
    #[error(transparent)]
    Conflict(#[from] ConflictReport),
}

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
