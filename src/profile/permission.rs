// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Permission bit flags attached to profile rule entries.
// Author: Lukas Bower

//! Permission bits carried by deny and allow rules.

use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use serde::{Serialize, Serializer};

use super::error::LineError;

bitflags! {
    /// Kinds of filesystem interaction a rule governs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permission: u8 {
        /// Opening the target path.
        const OPEN = 0b0001;
        /// Accessing (stat/exec checks) the target path.
        const ACCESS = 0b0010;
        /// Both open and access.
        const BOTH = Self::OPEN.bits() | Self::ACCESS.bits();
    }
}

impl Permission {
    /// Bits shared by `self` and `other`, or `None` when they are disjoint.
    #[must_use]
    pub fn overlap(self, other: Permission) -> Option<Permission> {
        let shared = self.intersection(other);
        if shared.is_empty() {
            None
        } else {
            Some(shared)
        }
    }

    /// Short label used in profile text and conflict reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        if self == Permission::BOTH {
            "oa"
        } else if self == Permission::OPEN {
            "o"
        } else if self == Permission::ACCESS {
            "a"
        } else {
            "-"
        }
    }
}

impl FromStr for Permission {
    type Err = LineError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "o" => Ok(Permission::OPEN),
            "a" => Ok(Permission::ACCESS),
            "oa" | "ao" => Ok(Permission::BOTH),
            other => Err(LineError::UnknownPermission(other.to_owned())),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
