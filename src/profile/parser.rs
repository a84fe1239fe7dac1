// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Line classifier and explicit parse state for access profiles.
// Author: Lukas Bower

//! Line-level profile grammar.
//!
//! ```text
//! # comment
//! deny [ "/usr/bin/a", "/usr/bin/b" ]
//! - "/etc/shadow": oa
//! allow [c]
//! - "/tmp": a
//! ```
//!
//! [`classify`] turns one line into a [`Line`] without side effects;
//! [`ParseState::apply`] folds it into the tables.

use super::error::LineError;
use super::path::clean_path;
use super::permission::Permission;
use super::table::{GroupKey, RuleTable};

const DENY_PREFIX: &str = "deny";
const ALLOW_PREFIX: &str = "allow";
const COMMENT_PREFIX: char = '#';
const RULE_PREFIX: char = '-';
const RULE_SEPARATOR: char = ':';

/// Which table rule lines are currently written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Rules forbidding access.
    Deny,
    /// Rules permitting access.
    Allow,
}

/// One classified profile line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Comment, blank or whitespace-only line.
    Ignored,
    /// `deny <list>` or `allow <list>`.
    Header { section: Section, group: GroupKey },
    /// `- "<path>": <perm>`.
    Rule { path: String, permission: Permission },
}

/// Classify a single line of profile text.
pub fn classify(line: &str) -> Result<Line, LineError> {
    let trimmed = line.trim();
    if trimmed.starts_with(COMMENT_PREFIX) {
        return Ok(Line::Ignored);
    }
    if let Some(rest) = line.strip_prefix(DENY_PREFIX) {
        return Ok(Line::Header {
            section: Section::Deny,
            group: GroupKey::from_list(rest),
        });
    }
    if let Some(rest) = line.strip_prefix(ALLOW_PREFIX) {
        return Ok(Line::Header {
            section: Section::Allow,
            group: GroupKey::from_list(rest),
        });
    }
    if trimmed.is_empty() {
        return Ok(Line::Ignored);
    }
    let Some(body) = trimmed.strip_prefix(RULE_PREFIX) else {
        return Err(LineError::UnknownLineType(line.to_owned()));
    };
    let mut parts = body.split(RULE_SEPARATOR);
    let (Some(raw_path), Some(raw_perm), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(LineError::UnknownLineType(line.to_owned()));
    };
    let raw_path = raw_path.trim().trim_matches('"');
    let permission = raw_perm.trim().parse::<Permission>()?;
    Ok(Line::Rule {
        path: clean_path(raw_path),
        permission,
    })
}

/// Tables under construction plus the active header, threaded line by line.
#[derive(Debug, Default)]
pub struct ParseState {
    active: Option<(Section, GroupKey)>,
    pub deny: RuleTable,
    pub allow: RuleTable,
}

impl ParseState {
    /// Fold a classified line into the state. Returns `None` when a rule
    /// arrives before any header has been seen.
    #[must_use]
    pub fn apply(mut self, line: Line) -> Option<Self> {
        match line {
            Line::Ignored => {}
            Line::Header { section, group } => self.active = Some((section, group)),
            Line::Rule { path, permission } => {
                let Some((section, group)) = &self.active else {
                    return None;
                };
                let table = match section {
                    Section::Deny => &mut self.deny,
                    Section::Allow => &mut self.allow,
                };
                table.insert(group, path, permission);
            }
        }
        Some(self)
    }

    /// Drop the parse state and keep only the tables.
    #[must_use]
    pub fn into_tables(self) -> (RuleTable, RuleTable) {
        (self.deny, self.allow)
    }
}
