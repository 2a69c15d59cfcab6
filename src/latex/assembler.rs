// file: src/latex/assembler.rs
// description: assembles grouped solution files into a rendered LaTeX document
// reference: internal document assembly pipeline

use crate::collection::metadata::{CollectionMetadata, DATE_FORMAT};
use crate::collection::SolutionCollection;
use crate::error::{ComposeError, Result};
use crate::latex::convert::LatexConverter;
use crate::latex::template::{DocumentTemplate, TemplateContext};
use crate::models::{ProblemType, SectionKey};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Orchestrates grouping, per-file conversion, and template rendering.
/// Assembly is all-or-nothing: any failure aborts before output is written.
pub struct DocumentAssembler {
    converter: LatexConverter,
    template: DocumentTemplate,
}

impl DocumentAssembler {
    pub fn new() -> Self {
        Self {
            converter: LatexConverter::new(),
            template: DocumentTemplate::new(),
        }
    }

    /// Render the collection's solutions of the given type to a LaTeX
    /// document string. Sections appear in ascending key order; files
    /// within a section in the order the grouper encountered them.
    pub fn assemble(
        &self,
        collection: &SolutionCollection,
        problem_type: ProblemType,
    ) -> Result<String> {
        let grouping = collection.files_for(problem_type)?;
        let meta = collection.meta();

        info!(
            "Assembling {} sections of {}s for {}",
            grouping.len(),
            problem_type.label(),
            meta.name
        );

        let mut sections = Vec::with_capacity(grouping.len());
        for (key, files) in grouping {
            sections.push(self.section_block(meta, key, files, problem_type)?);
        }

        let ctx = TemplateContext {
            title: format!("{} Solutions", meta.name),
            author: meta.solution_author.clone(),
            date: meta.solution_date.format(DATE_FORMAT).to_string(),
            abstract_text: abstract_text(meta),
            body: sections.join("\n\n"),
            bib_file: meta
                .references_file
                .as_ref()
                .map(|rel| collection.root().join(rel).display().to_string()),
        };

        self.template.render(&ctx)
    }

    /// Render and write to `outfile`. The file is only written after the
    /// whole document rendered successfully.
    pub fn assemble_to_file(
        &self,
        collection: &SolutionCollection,
        problem_type: ProblemType,
        outfile: &Path,
    ) -> Result<()> {
        let rendered = self.assemble(collection, problem_type)?;
        fs::write(outfile, rendered).map_err(|e| ComposeError::FileOperation {
            path: outfile.to_path_buf(),
            source: e,
        })?;
        info!("Wrote {}", outfile.display());
        Ok(())
    }

    fn section_block(
        &self,
        meta: &CollectionMetadata,
        key: &SectionKey,
        files: &[PathBuf],
        problem_type: ProblemType,
    ) -> Result<String> {
        let mut subsections = Vec::with_capacity(files.len());
        for file in files {
            subsections.push(self.file_block(file, problem_type)?);
        }
        Ok(format!(
            "\\section{{{} {}}}\n{}",
            meta.section_prefix,
            key,
            subsections.join("\n\n")
        ))
    }

    fn file_block(&self, file: &Path, problem_type: ProblemType) -> Result<String> {
        let number = problem_number(file, problem_type);
        let content = self.converter.convert_file(file)?;
        Ok(format!(
            "\\subsection{{{} {}}}\n{}",
            problem_type.label(),
            number,
            content
        ))
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

fn abstract_text(meta: &CollectionMetadata) -> String {
    format!(
        "The following is a selection of solutions for various problems and exercises \
         found in {} by {}. These solutions were written by {} and last updated on {}.",
        meta.book,
        meta.author,
        meta.solution_author,
        meta.solution_date.format(DATE_FORMAT)
    )
}

/// The displayed number is the filename stem with the type tag and its
/// joining dash removed: "prob-12" renders as "12".
fn problem_number(file: &Path, problem_type: ProblemType) -> String {
    let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    stem.replace(&format!("{}-", problem_type.tag()), "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::MetadataOverrides;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const DEMO_META: &str = "Name: SampleName\n\
                             Author: Problem Author\n\
                             Book: Sample Book Title\n\
                             Category: Mathematics\n\
                             SolutionAuthor: Solution Author\n\
                             SolutionDate: 04-06-2019\n";

    const PROB_ONE: &str = "This is a sample solution. The fundamental theorem gives \
                            $$\\int_{a}^{b} f(x) dx = F(b) - F(a)$$ for any antiderivative \
                            $F$ of $f$.";

    const PROB_TWO: &str = "Another sample solution. Chaining the equalities yields \
                            $$a = b = c = d$$ so the chain collapses. The inline form is \
                            $a = d$. The end.";

    const EX_ONE: &str =
        "A sample exercise solution with the identity $e^{i\\pi} + 1 = 0$ inline.";

    fn demo_collection(meta: &str) -> (TempDir, SolutionCollection) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("meta.yml"), meta).unwrap();
        for section in ["1", "2"] {
            let dir = temp.path().join(section);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("prob-1.md"), PROB_ONE).unwrap();
            fs::write(dir.join("prob-2.md"), PROB_TWO).unwrap();
            fs::write(dir.join("ex-1.md"), EX_ONE).unwrap();
        }
        let collection = SolutionCollection::from_meta_file(&temp.path().join("meta.yml")).unwrap();
        (temp, collection)
    }

    const EXPECTED_DEMO_TEX: &str = r"\title{SampleName Solutions}
\author{Solution Author}
\date{04-06-2019}

\documentclass[12pt]{article}

\begin{document}
\maketitle

\begin{abstract}
The following is a selection of solutions for various problems and exercises found in Sample Book Title by Problem Author. These solutions were written by Solution Author and last updated on 04-06-2019.
\end{abstract}

\tableofcontents
\newpage

\section{Chapter 1}
\subsection{Problem 1}
This is a sample solution. The fundamental theorem gives \[\int_{a}^{b} f(x) dx = F(b) - F(a)\] for any antiderivative \(F\) of \(f\).

\subsection{Problem 2}
Another sample solution. Chaining the equalities yields \[a = b = c = d\] so the chain collapses. The inline form is \(a = d\). The end.

\section{Chapter 2}
\subsection{Problem 1}
This is a sample solution. The fundamental theorem gives \[\int_{a}^{b} f(x) dx = F(b) - F(a)\] for any antiderivative \(F\) of \(f\).

\subsection{Problem 2}
Another sample solution. Chaining the equalities yields \[a = b = c = d\] so the chain collapses. The inline form is \(a = d\). The end.

\end{document}
";

    #[test]
    fn test_demo_document_matches_reference() {
        let (_temp, collection) = demo_collection(DEMO_META);
        let rendered = DocumentAssembler::new()
            .assemble(&collection, ProblemType::Problem)
            .unwrap();
        assert_eq!(rendered, EXPECTED_DEMO_TEX);
    }

    #[test]
    fn test_exercises_use_exercise_labels() {
        let (_temp, collection) = demo_collection(DEMO_META);
        let rendered = DocumentAssembler::new()
            .assemble(&collection, ProblemType::Exercise)
            .unwrap();

        assert!(rendered.contains("\\subsection{Exercise 1}"));
        assert!(!rendered.contains("\\subsection{Problem"));
        assert!(rendered.contains("\\(e^{i\\pi} + 1 = 0\\)"));
    }

    #[test]
    fn test_bibliography_included_when_configured() {
        let meta = format!("{}ReferencesFile: references.bib\n", DEMO_META);
        let (temp, collection) = demo_collection(&meta);
        let rendered = DocumentAssembler::new()
            .assemble(&collection, ProblemType::Problem)
            .unwrap();

        let bib_path = temp.path().join("references.bib").display().to_string();
        assert!(rendered.contains(&format!("\\addbibresource{{{}}}", bib_path)));
        assert!(rendered.contains("\\printbibliography"));
    }

    #[test]
    fn test_cleared_bibliography_renders_reference_document() {
        // Start from a collection that does declare a bibliography, clear it
        // via the override constructor, and expect the exact no-bib output.
        let meta = format!("{}ReferencesFile: references.bib\n", DEMO_META);
        let (_temp, collection) = demo_collection(&meta);
        let derived = collection.with_overrides(MetadataOverrides {
            references_file: Some(None),
            ..Default::default()
        });

        let rendered = DocumentAssembler::new()
            .assemble(&derived, ProblemType::Problem)
            .unwrap();
        assert_eq!(rendered, EXPECTED_DEMO_TEX);
    }

    #[test]
    fn test_assemble_to_file() {
        let (_temp, collection) = demo_collection(DEMO_META);
        let out_dir = TempDir::new().unwrap();
        let outfile = out_dir.path().join("demo.tex");

        DocumentAssembler::new()
            .assemble_to_file(&collection, ProblemType::Problem, &outfile)
            .unwrap();

        let written = fs::read_to_string(&outfile).unwrap();
        assert_eq!(written, EXPECTED_DEMO_TEX);
    }

    #[test]
    fn test_section_prefix_override() {
        let meta = DEMO_META.replace(
            "SolutionDate: 04-06-2019\n",
            "SolutionDate: 04-06-2019\nSectionPrefix: Unit\n",
        );
        let (_temp, collection) = demo_collection(&meta);
        let rendered = DocumentAssembler::new()
            .assemble(&collection, ProblemType::Problem)
            .unwrap();

        assert!(rendered.contains("\\section{Unit 1}"));
        assert!(rendered.contains("\\section{Unit 2}"));
    }

    #[test]
    fn test_problem_number_stripping() {
        assert_eq!(
            problem_number(Path::new("/tmp/3/prob-14.md"), ProblemType::Problem),
            "14"
        );
        assert_eq!(
            problem_number(Path::new("/tmp/3/ex-2.md"), ProblemType::Exercise),
            "2"
        );
    }
}
