// file: src/latex/convert.rs
// description: markdown to LaTeX conversion with math pass-through
// reference: https://docs.rs/pulldown-cmark

use crate::error::{ComposeError, Result};
use crate::utils::Validator;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::fs;
use std::path::Path;

pub struct LatexConverter {
    options: Options,
}

impl LatexConverter {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_MATH,
        }
    }

    /// Read a markdown solution file and convert its content.
    pub fn convert_file(&self, path: &Path) -> Result<String> {
        Validator::validate_markdown_extension(path)?;
        let content = fs::read_to_string(path).map_err(|e| ComposeError::FileOperation {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.convert(&content))
    }

    /// Convert markdown text to LaTeX. Math segments pass through verbatim:
    /// `$..$` becomes `\(..\)` and `$$..$$` becomes `\[..\]`. Everything
    /// else is escaped for LaTeX. The result carries no trailing whitespace.
    pub fn convert(&self, content: &str) -> String {
        let parser = Parser::new_ext(content, self.options);
        let mut out = String::with_capacity(content.len());
        let mut in_verbatim = false;

        for event in parser {
            match event {
                Event::Start(Tag::Paragraph) => {}
                Event::End(TagEnd::Paragraph) => out.push_str("\n\n"),
                Event::Start(Tag::Heading { .. }) => out.push_str("\\subsubsection*{"),
                Event::End(TagEnd::Heading(_)) => out.push_str("}\n\n"),
                Event::Start(Tag::Emphasis) => out.push_str("\\emph{"),
                Event::End(TagEnd::Emphasis) => out.push('}'),
                Event::Start(Tag::Strong) => out.push_str("\\textbf{"),
                Event::End(TagEnd::Strong) => out.push('}'),
                Event::Start(Tag::BlockQuote(_)) => out.push_str("\\begin{quote}\n"),
                Event::End(TagEnd::BlockQuote(_)) => out.push_str("\\end{quote}\n\n"),
                Event::Start(Tag::CodeBlock(_)) => {
                    in_verbatim = true;
                    out.push_str("\\begin{verbatim}\n");
                }
                Event::End(TagEnd::CodeBlock) => {
                    in_verbatim = false;
                    out.push_str("\\end{verbatim}\n\n");
                }
                Event::Start(Tag::List(start)) => {
                    out.push_str(if start.is_some() {
                        "\\begin{enumerate}\n"
                    } else {
                        "\\begin{itemize}\n"
                    });
                }
                Event::End(TagEnd::List(ordered)) => {
                    out.push_str(if ordered {
                        "\\end{enumerate}\n\n"
                    } else {
                        "\\end{itemize}\n\n"
                    });
                }
                Event::Start(Tag::Item) => out.push_str("\\item "),
                Event::End(TagEnd::Item) => out.push('\n'),
                Event::Start(Tag::Link { dest_url, .. }) => {
                    out.push_str("\\href{");
                    out.push_str(&dest_url);
                    out.push_str("}{");
                }
                Event::End(TagEnd::Link) => out.push('}'),
                Event::Text(text) => {
                    if in_verbatim {
                        out.push_str(&text);
                    } else {
                        out.push_str(&escape_latex(&text));
                    }
                }
                Event::Code(code) => {
                    out.push_str("\\texttt{");
                    out.push_str(&escape_latex(&code));
                    out.push('}');
                }
                Event::InlineMath(math) => {
                    out.push_str("\\(");
                    out.push_str(&math);
                    out.push_str("\\)");
                }
                Event::DisplayMath(math) => {
                    out.push_str("\\[");
                    out.push_str(&math);
                    out.push_str("\\]");
                }
                Event::SoftBreak => out.push('\n'),
                Event::HardBreak => out.push_str("\\\\\n"),
                Event::Rule => out.push_str("\\hrulefill\n\n"),
                _ => {}
            }
        }

        out.trim_end().to_string()
    }
}

impl Default for LatexConverter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}
