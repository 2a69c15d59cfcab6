// file: src/collection/grouper.rs
// description: directory walking and solution file grouping by section
// reference: https://docs.rs/walkdir

use crate::error::Result;
use crate::models::{ProblemType, SectionKey};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Section key to files found under that section, in encounter order.
pub type Grouping = BTreeMap<SectionKey, Vec<PathBuf>>;

/// Walk `root` and group every matching solution file under the key parsed
/// from its immediate parent directory name. Traversal is sorted by file
/// name so the per-section order is stable across runs. Filesystem errors
/// (missing root, permission denied) propagate to the caller.
pub fn group_files(root: &Path, problem_type: ProblemType) -> Result<Grouping> {
    info!(
        "Scanning {} for {} files",
        root.display(),
        problem_type.label()
    );

    let mut files_by_section = Grouping::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let message = e.to_string();
            e.into_io_error()
                .unwrap_or_else(|| std::io::Error::other(message))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !matches_problem_type(path, problem_type) {
            continue;
        }

        let section = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| SectionKey::parse(&n.to_string_lossy()))
            .unwrap_or_else(|| SectionKey::Name(String::new()));

        debug!("Matched {} under section {}", path.display(), section);
        files_by_section
            .entry(section)
            .or_default()
            .push(path.to_path_buf());
    }

    Ok(files_by_section)
}

/// A file matches when its stem contains the problem type tag and it has
/// the markdown extension. The tag match is a bare substring, so a stem
/// like "vertex-notes" also matches the exercise tag; the naming
/// convention relies on this and it must not be tightened here.
fn matches_problem_type(path: &Path, problem_type: ProblemType) -> bool {
    let has_md_extension = path.extension().is_some_and(|e| e == "md");
    let stem_has_tag = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.contains(problem_type.tag()));

    has_md_extension && stem_has_tag
}
