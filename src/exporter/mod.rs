// file: src/exporter/mod.rs
// description: export module exports
// reference: internal module structure

pub mod manifest;

pub use manifest::{CollectionManifest, FileEntry, ManifestExporter, SectionEntry};
