// file: src/exporter/manifest.rs
// description: json manifest export of a collection's metadata and file inventory

use crate::collection::metadata::DATE_FORMAT;
use crate::collection::{Grouping, SolutionCollection};
use crate::error::{ComposeError, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct CollectionManifest {
    pub exported_at: String,
    pub name: String,
    pub book: String,
    pub author: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub solution_author: String,
    pub solution_date: String,
    pub tags: Option<Vec<String>>,
    pub problem_count: usize,
    pub exercise_count: usize,
    pub problems: Vec<SectionEntry>,
    pub exercises: Vec<SectionEntry>,
}

#[derive(Debug, Serialize)]
pub struct SectionEntry {
    pub section: String,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Serialize)]
pub struct FileEntry {
    pub path: String,
    pub size: u64,
    pub content_hash: String,
}

pub struct ManifestExporter;

impl ManifestExporter {
    /// Snapshot the collection's metadata and both file groupings. Reads
    /// every matched file once to hash its content.
    pub fn build(collection: &SolutionCollection) -> Result<CollectionManifest> {
        let meta = collection.meta();

        Ok(CollectionManifest {
            exported_at: Utc::now().to_rfc3339(),
            name: meta.name.clone(),
            book: meta.book.clone(),
            author: meta.author.clone(),
            category: meta.category.clone(),
            subcategory: meta.subcategory.clone(),
            solution_author: meta.solution_author.clone(),
            solution_date: meta.solution_date.format(DATE_FORMAT).to_string(),
            tags: meta.tags.clone(),
            problem_count: collection.problem_count()?,
            exercise_count: collection.exercise_count()?,
            problems: section_entries(collection.root(), collection.problems()?)?,
            exercises: section_entries(collection.root(), collection.exercises()?)?,
        })
    }

    pub fn to_json(manifest: &CollectionManifest, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(manifest)
        } else {
            serde_json::to_string(manifest)
        };
        result.map_err(|e| ComposeError::Serialization(e.to_string()))
    }

    pub fn write(collection: &SolutionCollection, outfile: &Path, pretty: bool) -> Result<()> {
        let manifest = Self::build(collection)?;
        let json = Self::to_json(&manifest, pretty)?;
        fs::write(outfile, json).map_err(|e| ComposeError::FileOperation {
            path: outfile.to_path_buf(),
            source: e,
        })?;
        info!("Exported manifest to {}", outfile.display());
        Ok(())
    }
}

fn section_entries(root: &Path, grouping: &Grouping) -> Result<Vec<SectionEntry>> {
    let mut entries = Vec::with_capacity(grouping.len());

    for (key, files) in grouping {
        let mut file_entries = Vec::with_capacity(files.len());
        for file in files {
            let content = fs::read(file).map_err(|e| ComposeError::FileOperation {
                path: file.clone(),
                source: e,
            })?;

            let mut hasher = Sha256::new();
            hasher.update(&content);

            file_entries.push(FileEntry {
                path: file
                    .strip_prefix(root)
                    .unwrap_or(file)
                    .to_string_lossy()
                    .to_string(),
                size: content.len() as u64,
                content_hash: format!("{:x}", hasher.finalize()),
            });
        }
        entries.push(SectionEntry {
            section: key.to_string(),
            files: file_entries,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DEMO_META: &str = "Name: SampleName\n\
                             Author: Problem Author\n\
                             Book: Sample Book Title\n\
                             Category: Mathematics\n\
                             SolutionAuthor: Solution Author\n\
                             SolutionDate: 04-06-2019\n\
                             Tags: calculus,integrals\n";

    fn demo_collection() -> (TempDir, SolutionCollection) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("meta.yml"), DEMO_META).unwrap();
        for section in ["1", "2"] {
            let dir = temp.path().join(section);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("prob-1.md"), "First.").unwrap();
            fs::write(dir.join("prob-2.md"), "Second.").unwrap();
        }
        fs::write(temp.path().join("1").join("ex-1.md"), "Exercise.").unwrap();
        fs::write(temp.path().join("2").join("ex-1.md"), "Exercise.").unwrap();
        let collection = SolutionCollection::from_meta_file(&temp.path().join("meta.yml")).unwrap();
        (temp, collection)
    }

    #[test]
    fn test_manifest_counts_and_sections() {
        let (_temp, collection) = demo_collection();
        let manifest = ManifestExporter::build(&collection).unwrap();

        assert_eq!(manifest.name, "SampleName");
        assert_eq!(manifest.problem_count, 4);
        assert_eq!(manifest.exercise_count, 2);
        assert_eq!(manifest.problems.len(), 2);
        assert_eq!(manifest.problems[0].section, "1");
        assert_eq!(manifest.problems[0].files.len(), 2);
        assert_eq!(manifest.solution_date, "04-06-2019");
    }

    #[test]
    fn test_manifest_file_entries() {
        let (_temp, collection) = demo_collection();
        let manifest = ManifestExporter::build(&collection).unwrap();

        let entry = &manifest.problems[0].files[0];
        assert_eq!(entry.path, "1/prob-1.md");
        assert_eq!(entry.size, "First.".len() as u64);
        assert_eq!(entry.content_hash.len(), 64);
    }

    #[test]
    fn test_manifest_json_round() {
        let (_temp, collection) = demo_collection();
        let manifest = ManifestExporter::build(&collection).unwrap();
        let json = ManifestExporter::to_json(&manifest, true).unwrap();

        assert!(json.contains("\"problem_count\": 4"));
        assert!(json.contains("\"tags\""));
    }

    #[test]
    fn test_write_manifest() {
        let (_temp, collection) = demo_collection();
        let out = TempDir::new().unwrap();
        let outfile = out.path().join("manifest.json");

        ManifestExporter::write(&collection, &outfile, false).unwrap();
        let written = fs::read_to_string(&outfile).unwrap();
        assert!(written.contains("\"exercise_count\":2"));
    }
}
