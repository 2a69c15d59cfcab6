// file: src/models/problem.rs
// description: problem type enumeration and filename tag mapping
// reference: internal data structures

use crate::error::ComposeError;
use std::fmt;
use std::str::FromStr;

/// The two kinds of solution files a collection can hold. The tag is the
/// substring matched against filenames; the label is what appears in
/// subsection headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemType {
    Exercise,
    Problem,
}

impl ProblemType {
    pub fn tag(&self) -> &'static str {
        match self {
            ProblemType::Exercise => "ex",
            ProblemType::Problem => "prob",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProblemType::Exercise => "Exercise",
            ProblemType::Problem => "Problem",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ProblemType {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ex" | "exercise" => Ok(ProblemType::Exercise),
            "prob" | "problem" => Ok(ProblemType::Problem),
            other => Err(ComposeError::Validation(format!(
                "Unknown problem type: {} (expected 'prob' or 'ex')",
                other
            ))),
        }
    }
}
