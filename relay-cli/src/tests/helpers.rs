//! Temporary workspaces and booking files for CLI tests.
#![expect(
    clippy::expect_used,
    reason = "test helpers use expect for readable failures"
)]

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write file");
}

pub(super) fn read_ids(path: &Utf8Path) -> Vec<i64> {
    let contents = fs::read_to_string(path).expect("read output file");
    serde_json::from_str(&contents).expect("output should be a JSON id array")
}

/// JSON for the three-booking cycle whose best order is `[3, 2, 1]`.
pub(super) const CYCLE_BOOKINGS: &[u8] = br#"[
    { "id": 1, "start": "a", "end": "b" },
    { "id": 2, "start": "c", "end": "a" },
    { "id": 3, "start": "a", "end": "c" }
]"#;
