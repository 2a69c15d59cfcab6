// file: src/collection/solutions.rs
// description: solution collection with lazily cached per-section file groupings
// reference: internal data structures

use crate::collection::grouper::{self, Grouping};
use crate::collection::metadata::{CollectionMetadata, MetadataOverrides};
use crate::error::{ComposeError, Result};
use crate::models::ProblemType;
use crate::utils::Validator;
use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use yaml_rust::YamlLoader;

/// One directory tree of solution files plus its metadata. The two
/// groupings are computed on first access and cached for the lifetime of
/// the instance; the filesystem is treated as a static snapshot and the
/// cache is never invalidated.
#[derive(Debug)]
pub struct SolutionCollection {
    root: PathBuf,
    meta: CollectionMetadata,
    problems: OnceCell<Grouping>,
    exercises: OnceCell<Grouping>,
}

impl SolutionCollection {
    pub fn new(root: PathBuf, meta: CollectionMetadata) -> Self {
        Self {
            root,
            meta,
            problems: OnceCell::new(),
            exercises: OnceCell::new(),
        }
    }

    /// Load a collection from its metadata file. The collection root is the
    /// directory holding the metadata file.
    pub fn from_meta_file(meta_file: &Path) -> Result<Self> {
        let content = fs::read_to_string(meta_file).map_err(|e| ComposeError::FileOperation {
            path: meta_file.to_path_buf(),
            source: e,
        })?;

        let docs =
            YamlLoader::load_from_str(&content).map_err(|e| ComposeError::MetadataParse {
                file: meta_file.display().to_string(),
                message: e.to_string(),
            })?;

        let doc = docs.first().ok_or_else(|| ComposeError::MetadataParse {
            file: meta_file.display().to_string(),
            message: "empty metadata document".to_string(),
        })?;

        let meta = CollectionMetadata::from_yaml(doc)?;
        let root = meta_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Validator::validate_directory(&root)?;

        Ok(Self::new(root, meta))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meta(&self) -> &CollectionMetadata {
        &self.meta
    }

    /// Grouping for the given problem type, scanned at most once per
    /// instance. Later calls return the cached map even if the tree changed.
    pub fn files_for(&self, problem_type: ProblemType) -> Result<&Grouping> {
        let cell = match problem_type {
            ProblemType::Problem => &self.problems,
            ProblemType::Exercise => &self.exercises,
        };

        if let Some(grouping) = cell.get() {
            debug!("Using cached {} grouping", problem_type.label());
            return Ok(grouping);
        }

        let grouping = grouper::group_files(&self.root, problem_type)?;
        Ok(cell.get_or_init(|| grouping))
    }

    pub fn problems(&self) -> Result<&Grouping> {
        self.files_for(ProblemType::Problem)
    }

    pub fn exercises(&self) -> Result<&Grouping> {
        self.files_for(ProblemType::Exercise)
    }

    pub fn problem_count(&self) -> Result<usize> {
        Ok(self.problems()?.values().map(Vec::len).sum())
    }

    pub fn exercise_count(&self) -> Result<usize> {
        Ok(self.exercises()?.values().map(Vec::len).sum())
    }

    /// One-line summary, e.g. `SolutionCollection(SampleName, 4P, 2E)`.
    pub fn describe(&self) -> Result<String> {
        Ok(format!(
            "SolutionCollection({}, {}P, {}E)",
            self.meta.name,
            self.problem_count()?,
            self.exercise_count()?
        ))
    }

    /// Derived copy with metadata fields replaced. The copy shares this
    /// instance's cached groupings, so no rescan happens for groupings
    /// already computed.
    pub fn with_overrides(&self, overrides: MetadataOverrides) -> Self {
        Self {
            root: self.root.clone(),
            meta: self.meta.with_overrides(overrides),
            problems: self.problems.clone(),
            exercises: self.exercises.clone(),
        }
    }
}
