// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Validate on-disk profile loading, skipping and conflict rejection.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use std::fs;

use accessprof::{GroupKey, LineError, Permission, Profile, ProfileError};
use tempfile::tempdir;

const PROFILE: &str = r#"# sample
deny [ "/usr/bin/cat", "/usr/bin/less" ]
- "/etc/passwd": o
- "/etc/shadow": oa

allow [/usr/bin/cat]
- "/tmp": a
   # indented comment
-badformat
- "/var/log": rw
- "/var/./tmp/../run": ao
"#;

fn write_profile(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile");
    fs::write(&path, contents).expect("write profile");
    (dir, path)
}

#[test]
fn loads_profile_from_disk() {
    let (_dir, path) = write_profile(PROFILE);
    let profile = Profile::load(&path).expect("load profile");

    let readers = GroupKey::from_list("[/usr/bin/cat, /usr/bin/less]");
    let cat = GroupKey::from_list("[/usr/bin/cat]");
    assert_eq!(profile.deny().get(&readers, "/etc/passwd"), Some(Permission::OPEN));
    assert_eq!(profile.deny().get(&readers, "/etc/shadow"), Some(Permission::BOTH));
    assert_eq!(profile.allow().get(&cat, "/tmp"), Some(Permission::ACCESS));
    assert_eq!(profile.allow().get(&cat, "/var/run"), Some(Permission::BOTH));
    assert_eq!(profile.allow().get(&cat, "/var/log"), None);

    let errors: Vec<_> = profile.diagnostics().iter().map(|d| d.error.clone()).collect();
    assert_eq!(
        errors,
        vec![
            LineError::UnknownLineType("-badformat".into()),
            LineError::UnknownPermission("rw".into()),
        ]
    );
}

#[test]
fn missing_profile_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = Profile::load(dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, ProfileError::Io { .. }));
    assert!(err.to_string().contains("absent"));
}

#[test]
fn non_utf8_profile_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("binary");
    fs::write(&path, b"deny [a]\n- /p: o\n\xff\xfe\n").expect("write");
    assert!(matches!(Profile::load(&path), Err(ProfileError::Io { .. })));
}

#[test]
fn reloading_is_deterministic() {
    let (_dir, path) = write_profile(PROFILE);
    let first = Profile::load(&path).expect("first load");
    let second = Profile::load(&path).expect("second load");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(first.deny()).unwrap(),
        serde_json::to_string(second.deny()).unwrap()
    );
}

#[test]
fn conflicts_are_aggregated() {
    let (_dir, path) = write_profile(
        "deny [a]\n- /p: o\n- /q: oa\n- /r: o\nallow [a]\n- /p: o\n- /q: a\n- /r: a\n",
    );
    let err = Profile::load(&path).unwrap_err();
    let ProfileError::Conflict(report) = &err else {
        panic!("expected conflict, got {err:?}");
    };
    let found: Vec<_> = report
        .conflicts()
        .iter()
        .map(|c| (c.group.as_str(), c.path.as_str(), c.permission.label()))
        .collect();
    assert_eq!(found, vec![("a", "/p", "o"), ("a", "/q", "a")]);
    assert_eq!(err.to_string().lines().count(), 3);
}

#[test]
fn group_and_rule_paths_clean_alike() {
    let profile = Profile::parse("deny [./a/../b]\n- ./a/../b: o\n").expect("parse");
    let key = GroupKey::from_list("[b]");
    assert_eq!(key.as_str(), "b");
    assert_eq!(profile.deny().get(&key, "b"), Some(Permission::OPEN));
}

#[test]
fn ignored_lines_do_not_change_state() {
    let with_noise = Profile::parse("deny [a]\n# x\n\n   \n\t\n- /p: o\n").expect("parse");
    let without = Profile::parse("deny [a]\n- /p: o\n").expect("parse");
    assert_eq!(with_noise, without);
}
