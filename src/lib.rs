// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod collection;
pub mod error;
pub mod exporter;
pub mod latex;
pub mod models;
pub mod utils;

pub use collection::{CollectionMetadata, Grouping, MetadataOverrides, SolutionCollection};
pub use error::{ComposeError, Result};
pub use exporter::{CollectionManifest, FileEntry, ManifestExporter, SectionEntry};
pub use latex::{DocumentAssembler, DocumentTemplate, LatexConverter, TemplateContext};
pub use models::{ProblemType, SectionKey};
