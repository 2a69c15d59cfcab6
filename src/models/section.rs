// file: src/models/section.rs
// description: section key type with numeric-before-name ordering
// reference: internal data structures

use std::fmt;

/// Grouping key for a section directory. Directory names made of digits
/// become `Num` so that section "10" sorts after section "2"; everything
/// else is kept verbatim as `Name`. The derived ordering puts all numeric
/// keys (ascending) before all name keys (lexicographic).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey {
    Num(u64),
    Name(String),
}

impl SectionKey {
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<u64>() {
                return SectionKey::Num(n);
            }
        }
        SectionKey::Name(raw.to_string())
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKey::Num(n) => write!(f, "{}", n),
            SectionKey::Name(s) => write!(f, "{}", s),
        }
    }
}
