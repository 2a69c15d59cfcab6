// file: src/models/mod.rs
// description: core data model exports
// reference: internal module structure

pub mod problem;
pub mod section;

pub use problem::ProblemType;
pub use section::SectionKey;
