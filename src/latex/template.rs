// file: src/latex/template.rs
// description: LaTeX document template with placeholder substitution
// reference: internal templating conventions

use crate::error::{ComposeError, Result};

const PREAMBLE: &str = "\\title{{SolutionTitle}}\n\
                        \\author{{SolutionAuthor}}\n\
                        \\date{{SolutionDate}}\n\n\
                        \\documentclass[12pt]{article}\n";

const BIB_PREAMBLE: &str =
    "\n\\usepackage[style=numeric]{biblatex}\n\\addbibresource{{BibFile}}\n";

const DOCUMENT_OPEN: &str = "\n\\begin{document}\n\\maketitle\n\n\
                             \\begin{abstract}\n{Abstract}\n\\end{abstract}\n\n\
                             \\tableofcontents\n\\newpage\n\n\
                             {Body}\n";

const BIB_BLOCK: &str = "\n\\nocite{*}\n\\printbibliography\n";

const DOCUMENT_CLOSE: &str = "\n\\end{document}\n";

const PLACEHOLDERS: [&str; 6] = [
    "{SolutionTitle}",
    "{SolutionAuthor}",
    "{SolutionDate}",
    "{Abstract}",
    "{Body}",
    "{BibFile}",
];

/// Values interpolated into the document template. `bib_file` selects the
/// bibliography variant of the template; when absent the rendered output
/// contains no bibliography block at all.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub title: String,
    pub author: String,
    pub date: String,
    pub abstract_text: String,
    pub body: String,
    pub bib_file: Option<String>,
}

pub struct DocumentTemplate {
    custom: Option<String>,
}

impl DocumentTemplate {
    pub fn new() -> Self {
        Self { custom: None }
    }

    /// Use a caller-supplied template body instead of the built-in one. The
    /// same placeholder names apply.
    pub fn with_custom_template(template: String) -> Self {
        Self {
            custom: Some(template),
        }
    }

    pub fn render(&self, ctx: &TemplateContext) -> Result<String> {
        let template = match &self.custom {
            Some(custom) => custom.clone(),
            None => Self::builtin(ctx.bib_file.is_some()),
        };

        let mut rendered = template
            .replace("{SolutionTitle}", &ctx.title)
            .replace("{SolutionAuthor}", &ctx.author)
            .replace("{SolutionDate}", &ctx.date)
            .replace("{Abstract}", &ctx.abstract_text)
            .replace("{Body}", &ctx.body);

        if let Some(bib) = &ctx.bib_file {
            rendered = rendered.replace("{BibFile}", bib);
        }

        for placeholder in PLACEHOLDERS {
            if rendered.contains(placeholder) {
                return Err(ComposeError::Render(format!(
                    "Unresolved template placeholder: {}",
                    placeholder
                )));
            }
        }

        Ok(rendered)
    }

    fn builtin(with_bib: bool) -> String {
        if with_bib {
            format!(
                "{}{}{}{}{}",
                PREAMBLE, BIB_PREAMBLE, DOCUMENT_OPEN, BIB_BLOCK, DOCUMENT_CLOSE
            )
        } else {
            format!("{}{}{}", PREAMBLE, DOCUMENT_OPEN, DOCUMENT_CLOSE)
        }
    }
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::new()
    }
}
