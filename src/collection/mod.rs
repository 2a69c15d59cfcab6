// file: src/collection/mod.rs
// description: collection loading and grouping module exports
// reference: internal module structure

pub mod grouper;
pub mod metadata;
pub mod solutions;

pub use grouper::{Grouping, group_files};
pub use metadata::{CollectionMetadata, DATE_FORMAT, MetaField, MetadataOverrides};
pub use solutions::SolutionCollection;
