// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Load access profiles into deny/allow rule tables and validate them.
// Author: Lukas Bower

//! Access profile loading.
//!
//! A profile lists, per executable group, which target paths may not
//! (`deny`) or may (`allow`) be opened or accessed. Loading reads every line,
//! skips malformed ones with a logged diagnostic, and rejects the profile if
//! any path is both denied and allowed on an overlapping permission bit.

pub mod conflict;
pub mod error;
pub mod parser;
pub mod path;
pub mod permission;
pub mod table;

use core::fmt;
use core::str::FromStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, error, info};

pub use conflict::{check_conflicts, Conflict, ConflictReport};
pub use error::{LineError, ProfileError};
pub use parser::{classify, Line, ParseState, Section};
pub use path::{clean_path, parse_list};
pub use permission::Permission;
pub use table::{GroupKey, PathRules, RuleTable};

const INLINE_SOURCE: &str = "<inline>";
const READER_SOURCE: &str = "<reader>";

type Fold = (ParseState, Vec<Diagnostic>);

/// A profile line that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// Why the line was skipped.
    pub error: LineError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Validated deny and allow tables loaded from one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    deny: RuleTable,
    allow: RuleTable,
    diagnostics: Vec<Diagnostic>,
}

impl Profile {
    /// Open and load the profile at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ProfileError::io(path, e))?;
        let profile = Self::from_lines(BufReader::new(file).lines(), path)?;
        info!(
            "loaded profile {}: {} deny rule(s), {} allow rule(s), {} skipped line(s)",
            path.display(),
            profile.deny.rule_count(),
            profile.allow.rule_count(),
            profile.diagnostics.len()
        );
        Ok(profile)
    }

    /// Load a profile from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ProfileError> {
        Self::from_lines(reader.lines(), Path::new(READER_SOURCE))
    }

    /// Load a profile from in-memory text.
    pub fn parse(text: &str) -> Result<Self, ProfileError> {
        Self::from_lines(
            text.lines().map(|line| Ok(line.to_owned())),
            Path::new(INLINE_SOURCE),
        )
    }

    fn from_lines<I>(lines: I, source: &Path) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let (state, diagnostics) = lines.into_iter().enumerate().try_fold(
            (ParseState::default(), Vec::new()),
            |(state, mut diagnostics), (idx, line)| -> Result<Fold, ProfileError> {
                let number = idx + 1;
                let line = line.map_err(|e| ProfileError::io(source, e))?;
                debug!("line {number}: {line}");
                let classified = match classify(&line) {
                    Ok(classified) => classified,
                    Err(err) => {
                        error!("{}:{number}: {err}", source.display());
                        diagnostics.push(Diagnostic {
                            line: number,
                            error: err,
                        });
                        return Ok((state, diagnostics));
                    }
                };
                let state = state
                    .apply(classified)
                    .ok_or(ProfileError::RuleBeforeHeader { line: number })?;
                Ok((state, diagnostics))
            },
        )?;

        let (deny, allow) = state.into_tables();
        debug!("deny: {deny:?}");
        debug!("allow: {allow:?}");
        check_conflicts(&deny, &allow)?;
        Ok(Self {
            deny,
            allow,
            diagnostics,
        })
    }

    /// Rules forbidding access.
    #[must_use]
    pub fn deny(&self) -> &RuleTable {
        &self.deny
    }

    /// Rules permitting access.
    #[must_use]
    pub fn allow(&self) -> &RuleTable {
        &self.allow
    }

    /// Lines skipped while loading.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the profile, returning `(deny, allow)`.
    #[must_use]
    pub fn into_tables(self) -> (RuleTable, RuleTable) {
        (self.deny, self.allow)
    }
}

impl FromStr for Profile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"# comment line, ignored
deny [ "a", "b" ]
- "/etc/passwd": o
- "/etc/shadow": oa
allow [c]
- "/tmp": a
"#;

    #[test]
    fn parses_sample_profile() {
        let profile = Profile::parse(SAMPLE).unwrap();
        let ab = GroupKey::from_list("[a,b]");
        let c = GroupKey::from_list("[c]");
        assert_eq!(profile.deny().get(&ab, "/etc/passwd"), Some(Permission::OPEN));
        assert_eq!(profile.deny().get(&ab, "/etc/shadow"), Some(Permission::BOTH));
        assert_eq!(profile.allow().get(&c, "/tmp"), Some(Permission::ACCESS));
        assert!(profile.diagnostics().is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let profile = Profile::parse("deny [a]\n-badformat\n- /x: rw\n- /p: o\n").unwrap();
        let a = GroupKey::from_list("[a]");
        assert_eq!(profile.deny().get(&a, "/p"), Some(Permission::OPEN));
        assert_eq!(profile.deny().rule_count(), 1);
        let lines: Vec<_> = profile.diagnostics().iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert_eq!(profile.diagnostics()[0].to_string(), "line 2: unknown line type: -badformat");
    }

    #[test]
    fn last_write_wins() {
        let profile = Profile::parse("deny [a]\n- /p: o\n- /p: a\ndeny [a]\n- /p: oa\n").unwrap();
        let a = GroupKey::from_list("[a]");
        assert_eq!(profile.deny().get(&a, "/p"), Some(Permission::BOTH));
    }

    #[test]
    fn rule_before_header_is_fatal() {
        let err = Profile::parse("# header missing\n- /p: o\ndeny [a]\n").unwrap_err();
        assert!(matches!(err, ProfileError::RuleBeforeHeader { line: 2 }));
    }

    #[test]
    fn malformed_rule_before_header_is_only_skipped() {
        let profile = Profile::parse("-bad\ndeny [a]\n- /p: o\n").unwrap();
        assert_eq!(profile.diagnostics().len(), 1);
    }

    #[test]
    fn conflicting_profile_is_rejected() {
        let err = "deny [a]\n- /p: oa\nallow [a]\n- /p: a\n"
            .parse::<Profile>()
            .unwrap_err();
        let report = match err {
            ProfileError::Conflict(report) => report,
            other => panic!("expected conflict, got {other:?}"),
        };
        assert_eq!(report.conflicts()[0].permission, Permission::ACCESS);
    }

    #[test]
    fn empty_target_path_is_kept() {
        let profile = Profile::parse("deny [a]\n- \"\": o\n").unwrap();
        assert!(profile.diagnostics().is_empty());
        assert_eq!(profile.deny().rule_count(), 1);
        assert_eq!(
            profile.deny().get(&GroupKey::from_list("[a]"), "."),
            Some(Permission::OPEN)
        );
    }

    #[test]
    fn reader_and_text_agree() {
        let from_reader = Profile::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(from_reader, Profile::parse(SAMPLE).unwrap());
    }
}
