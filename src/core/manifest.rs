//! Rerun manifest location
//!
//! The runner writes the scenarios that failed into a rerun file. Its path is
//! fixed up front from the suite identifier so that retry invocations can
//! point at it before the first attempt has created it.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Extension used by feature files and by the rerun manifest
pub const MANIFEST_SUFFIX: &str = ".feature";

const MANIFEST_PREFIX: &str = "rerun_";
const FALLBACK_NAME: &str = "suite";

fn unsafe_chars() -> &'static Regex {
    static UNSAFE_CHARS: OnceLock<Regex> = OnceLock::new();
    UNSAFE_CHARS.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("static pattern"))
}

/// Path of the rerun file for a suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RerunManifest {
    path: PathBuf,
}

impl RerunManifest {
    /// Derive the manifest path for `suite` inside `dir`
    pub fn for_suite(suite: &str, dir: &Path) -> Self {
        let file_name = format!("{}{}{}", MANIFEST_PREFIX, manifest_stem(suite), MANIFEST_SUFFIX);
        Self {
            path: dir.join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Argument telling the runner to read its scenario list from the manifest
    pub fn indirect_target(&self) -> String {
        format!("@{}", self.path.display())
    }

    /// Whether the runner has written the manifest yet
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Reduce a suite path or tag expression to a file-name-safe stem
pub fn manifest_stem(suite: &str) -> String {
    let trimmed = suite.trim_end_matches(['/', '\\']);
    let last = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
    let last = last.strip_suffix(MANIFEST_SUFFIX).unwrap_or(last);

    let stem = unsafe_chars().replace_all(last, "_");
    let stem = stem.trim_matches('_');

    if stem.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        stem.to_string()
    }
}
