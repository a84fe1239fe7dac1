// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Executable group keys and the per-group rule tables they index.
// Author: Lukas Bower

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::Serialize;

use super::path::{clean_path, parse_list, GROUP_DELIMITER};
use super::permission::Permission;

/// Canonical key naming one or more executables that share a rule set.
///
/// Keys compare by their joined text, so `[a, b]` and `[b, a]` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupKey(String);

impl GroupKey {
    /// Build a key from the list text following a `deny`/`allow` header.
    #[must_use]
    pub fn from_list(raw: &str) -> Self {
        Self(parse_list(raw).join(GROUP_DELIMITER))
    }

    /// Borrow the canonical key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Target path to permission bits for a single group.
pub type PathRules = BTreeMap<String, Permission>;

/// Rules for one section kind, keyed by executable group then target path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleTable {
    groups: BTreeMap<GroupKey, PathRules>,
}

impl RuleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `permission` for `path` under `group`, replacing any earlier
    /// value. Returns the replaced permission.
    pub fn insert(
        &mut self,
        group: &GroupKey,
        path: String,
        permission: Permission,
    ) -> Option<Permission> {
        self.groups
            .entry(group.clone())
            .or_default()
            .insert(path, permission)
    }

    /// Permission stored for `path` under `group`.
    #[must_use]
    pub fn get(&self, group: &GroupKey, path: &str) -> Option<Permission> {
        self.groups.get(group)?.get(path).copied()
    }

    /// Like [`RuleTable::get`] but cleans `path` first.
    #[must_use]
    pub fn lookup(&self, group: &GroupKey, path: &str) -> Option<Permission> {
        self.get(group, &clean_path(path))
    }

    /// All rules recorded for `group`.
    #[must_use]
    pub fn group(&self, group: &GroupKey) -> Option<&PathRules> {
        self.groups.get(group)
    }

    /// Iterate over groups in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, GroupKey, PathRules> {
        self.groups.iter()
    }

    /// Number of groups with at least one rule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no group has any rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of (group, path) entries.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a GroupKey, &'a PathRules);
    type IntoIter = btree_map::Iter<'a, GroupKey, PathRules>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
