// file: src/latex/mod.rs
// description: LaTeX conversion and rendering module exports
// reference: internal module structure

pub mod assembler;
pub mod convert;
pub mod template;

pub use assembler::DocumentAssembler;
pub use convert::{LatexConverter, escape_latex};
pub use template::{DocumentTemplate, TemplateContext};
