#![allow(dead_code)]

use std::path::PathBuf;

/// Write a bash script standing in for the analyzer binary.
///
/// Returns the script path and the `TempDir` so the caller keeps it alive
/// for the duration of the test.
pub fn mock_analyzer(script: &str) -> (PathBuf, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let script_path = tmp.path().join("golint");
    std::fs::write(&script_path, format!("#!/bin/bash\n{script}")).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    (script_path, tmp)
}
