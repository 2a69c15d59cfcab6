// file: src/collection/metadata.rs
// description: collection metadata model, declarative field table, and YAML loading
// reference: https://docs.rs/yaml-rust

use crate::error::{ComposeError, Result};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use yaml_rust::Yaml;

/// Textual format used for `SolutionDate` values in metadata files and for
/// dates interpolated into rendered documents.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// One recognized metadata key. The loader walks [`FIELDS`] in order,
/// resolving each key against the YAML document, falling back to the
/// declared default, and failing when a required key stays unresolved.
#[derive(Debug, Clone, Copy)]
pub struct MetaField {
    pub key: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
}

impl MetaField {
    const fn required(key: &'static str) -> Self {
        Self {
            key,
            required: true,
            default: None,
        }
    }

    const fn optional(key: &'static str) -> Self {
        Self {
            key,
            required: false,
            default: None,
        }
    }

    const fn with_default(key: &'static str, default: &'static str) -> Self {
        Self {
            key,
            required: false,
            default: Some(default),
        }
    }
}

// SolutionDate carries no static default here; its default (today) is
// applied at coercion time since it depends on the load instant.
pub const FIELDS: [MetaField; 11] = [
    MetaField::required("Name"),
    MetaField::required("Author"),
    MetaField::required("Book"),
    MetaField::required("Category"),
    MetaField::required("SolutionAuthor"),
    MetaField::optional("ISBN"),
    MetaField::optional("ReferencesFile"),
    MetaField::with_default("SectionPrefix", "Chapter"),
    MetaField::optional("Subcategory"),
    MetaField::optional("Tags"),
    MetaField::optional("SolutionDate"),
];

/// Immutable per-collection metadata, constructed once from a `meta.yml`
/// record with defaults and coercions applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionMetadata {
    pub name: String,
    pub author: String,
    pub book: String,
    pub category: String,
    pub solution_author: String,
    pub isbn: Option<String>,
    pub references_file: Option<String>,
    pub section_prefix: String,
    pub subcategory: Option<String>,
    pub tags: Option<Vec<String>>,
    pub solution_date: NaiveDate,
}

/// Field overrides for deriving a modified copy of a [`CollectionMetadata`].
/// Clearable optional fields use `Some(None)` to mean "unset the value".
#[derive(Debug, Clone, Default)]
pub struct MetadataOverrides {
    pub name: Option<String>,
    pub author: Option<String>,
    pub book: Option<String>,
    pub category: Option<String>,
    pub solution_author: Option<String>,
    pub isbn: Option<Option<String>>,
    pub references_file: Option<Option<String>>,
    pub section_prefix: Option<String>,
    pub subcategory: Option<Option<String>>,
    pub tags: Option<Option<Vec<String>>>,
    pub solution_date: Option<NaiveDate>,
}

impl CollectionMetadata {
    /// Build metadata from a parsed YAML document, applying the field table
    /// in [`FIELDS`]. Fails with [`ComposeError::MissingField`] when a
    /// required key is absent after defaults.
    pub fn from_yaml(doc: &Yaml) -> Result<Self> {
        let mut resolved: HashMap<&'static str, String> = HashMap::new();

        for field in &FIELDS {
            let value =
                scalar_to_string(&doc[field.key]).or_else(|| field.default.map(String::from));
            match value {
                Some(v) => {
                    resolved.insert(field.key, v);
                }
                None if field.required => {
                    return Err(ComposeError::MissingField(field.key.to_string()));
                }
                None => {}
            }
        }

        let solution_date = match resolved.remove("SolutionDate") {
            Some(text) => parse_solution_date(&text)?,
            None => Local::now().date_naive(),
        };

        let tags = resolved
            .remove("Tags")
            .map(|csv| csv.split(',').map(str::to_string).collect());

        // Required keys are guaranteed present after the resolution loop.
        Ok(Self {
            name: resolved.remove("Name").unwrap_or_default(),
            author: resolved.remove("Author").unwrap_or_default(),
            book: resolved.remove("Book").unwrap_or_default(),
            category: resolved.remove("Category").unwrap_or_default(),
            solution_author: resolved.remove("SolutionAuthor").unwrap_or_default(),
            isbn: resolved.remove("ISBN"),
            references_file: resolved.remove("ReferencesFile"),
            section_prefix: resolved.remove("SectionPrefix").unwrap_or_default(),
            subcategory: resolved.remove("Subcategory"),
            tags,
            solution_date,
        })
    }

    /// Derived copy with selected fields replaced.
    pub fn with_overrides(&self, overrides: MetadataOverrides) -> Self {
        Self {
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            author: overrides.author.unwrap_or_else(|| self.author.clone()),
            book: overrides.book.unwrap_or_else(|| self.book.clone()),
            category: overrides.category.unwrap_or_else(|| self.category.clone()),
            solution_author: overrides
                .solution_author
                .unwrap_or_else(|| self.solution_author.clone()),
            isbn: overrides.isbn.unwrap_or_else(|| self.isbn.clone()),
            references_file: overrides
                .references_file
                .unwrap_or_else(|| self.references_file.clone()),
            section_prefix: overrides
                .section_prefix
                .unwrap_or_else(|| self.section_prefix.clone()),
            subcategory: overrides
                .subcategory
                .unwrap_or_else(|| self.subcategory.clone()),
            tags: overrides.tags.unwrap_or_else(|| self.tags.clone()),
            solution_date: overrides.solution_date.unwrap_or(self.solution_date),
        }
    }
}

pub fn parse_solution_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| ComposeError::DateParse {
        value: text.to_string(),
        source: e,
    })
}

/// YAML scalars other than strings still coerce for string-typed fields;
/// bare ISBNs in particular parse as integers.
fn scalar_to_string(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Real(r) => Some(r.clone()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
