// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Lexical path cleaning and executable list canonicalization.
// Author: Lukas Bower

//! Lexical path helpers shared by group headers and rule lines.
//!
//! Nothing here touches the filesystem: paths are cleaned purely by their
//! components so the same profile text always yields the same keys.

use std::path::{Component, Path};

/// Separator joining group members into one canonical key.
pub const GROUP_DELIMITER: &str = ",";

/// Lexically clean `raw`, collapsing `.`, `..` and repeated separators.
///
/// `..` directly under the root is dropped; a leading `..` in a relative
/// path is preserved. An empty result becomes `.` (or `/` when rooted).
#[must_use]
pub fn clean_path(raw: &str) -> String {
    let mut stack: Vec<String> = Vec::new();
    let mut rooted = false;
    for component in Path::new(raw).components() {
        match component {
            Component::RootDir => {
                rooted = true;
                stack.clear();
            }
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(last) if last != ".." => {
                    stack.pop();
                }
                _ if rooted => {}
                _ => stack.push("..".to_owned()),
            },
            Component::Normal(part) => stack.push(part.to_string_lossy().into_owned()),
            Component::Prefix(prefix) => {
                rooted = true;
                stack.clear();
                stack.push(prefix.as_os_str().to_string_lossy().into_owned());
            }
        }
    }
    let joined = stack.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_owned(),
        (false, false) => joined,
    }
}

/// Split a bracketed, comma separated, optionally quoted list into cleaned
/// paths, keeping the original order and dropping empty entries.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(']').unwrap_or(trimmed);
    trimmed
        .split(',')
        .map(|item| item.trim().trim_matches('"'))
        .filter(|item| !item.is_empty())
        .map(clean_path)
        .collect()
}
