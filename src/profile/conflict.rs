// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Detect targets that are both denied and allowed for one group.
// Author: Lukas Bower

use std::fmt;

use super::permission::Permission;
use super::table::{GroupKey, RuleTable};

/// One (group, path) pair whose deny and allow bits overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Executable group holding both rules.
    pub group: GroupKey,
    /// Target path named by both rules.
    pub path: String,
    /// Bits present in both the deny and the allow rule.
    pub permission: Permission,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exe list: {}, target path: {}, perm: {}",
            self.group, self.path, self.permission
        )
    }
}

/// Every conflict found in a profile, reported as a single error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    conflicts: Vec<Conflict>,
}

impl ConflictReport {
    /// Conflicts in (group, path) order.
    #[must_use]
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("same target defined at deny rule and allow rule:")?;
        for conflict in &self.conflicts {
            write!(f, "\n\t- {conflict}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConflictReport {}

/// Compare every deny rule with every allow rule of the same group.
///
/// Bits are intersected rather than compared, so a deny of `oa` conflicts
/// with an allow of `o` on the `o` bit alone.
pub fn check_conflicts(deny: &RuleTable, allow: &RuleTable) -> Result<(), ConflictReport> {
    let mut conflicts = Vec::new();
    for (group, denied) in deny {
        let Some(allowed) = allow.group(group) else {
            continue;
        };
        for (deny_path, deny_perm) in denied {
            for (allow_path, allow_perm) in allowed {
                if deny_path != allow_path {
                    continue;
                }
                if let Some(permission) = deny_perm.overlap(*allow_perm) {
                    conflicts.push(Conflict {
                        group: group.clone(),
                        path: deny_path.clone(),
                        permission,
                    });
                }
            }
        }
    }
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(ConflictReport { conflicts })
    }
}
