//! Directory walking for the `all` batch mode (Section 6). The core is
//! single-threaded and synchronous (Section 5); formulas are processed one
//! after another, with no state shared between them.

use std::path::PathBuf;

use walkdir::WalkDir;

/// Every `*.cnf` file directly reachable from `dir`, depth-first, sorted for
/// reproducible run ordering.
#[must_use]
pub fn find_cnf_files(dir: &std::path::Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("cnf"))
        .collect();
    files.sort();
    files
}
