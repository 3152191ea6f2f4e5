use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const DATA_DIR: &str = "data";
pub const LINKS_FILE: &str = "data/links.json";
pub const ASSIGNMENTS_FILE: &str = "data/assignments.json";

/// URL path segment in front of the personal link id.
pub const LINK_PATH_PREFIX: &str = "qui-hem-toca-a-mi";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

pub fn links_path(root: &Path) -> PathBuf {
    root.join(LINKS_FILE)
}

pub fn assignments_path(root: &Path) -> PathBuf {
    root.join(ASSIGNMENTS_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
