use serde::Serialize;
use std::collections::HashSet;

/// The eight mandatory leading columns, in order
pub const MANDATORY_COLUMNS: [&str; 8] =
    ["CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO"];

/// Name of the optional genotype-format column
pub const FORMAT_COLUMN: &str = "FORMAT";

/// Column names from the `#CHROM` line
///
/// The leading `#` of the header line is not part of the first column name.
/// Invariants: the first eight columns are [`MANDATORY_COLUMNS`], column nine,
/// if present, is `FORMAT`, and no name repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    columns: Vec<String>,
}

/// Reason a column list cannot form a header
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("expected mandatory column '{expected}' at position {position}, found '{found}'")]
    MandatoryColumn {
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("header has {0} columns, at least 8 are required")]
    TooFewColumns(usize),

    #[error("column 9 must be FORMAT when sample columns are present, found '{0}'")]
    SamplesWithoutFormat(String),

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
}

impl Header {
    /// Build a header from column names, checking the structural invariants
    ///
    /// # Errors
    ///
    /// Returns a [`HeaderError`] describing the first violated invariant.
    pub fn new(columns: Vec<String>) -> Result<Self, HeaderError> {
        if columns.len() < MANDATORY_COLUMNS.len() {
            return Err(HeaderError::TooFewColumns(columns.len()));
        }

        for (position, &expected) in MANDATORY_COLUMNS.iter().enumerate() {
            if columns[position] != expected {
                return Err(HeaderError::MandatoryColumn {
                    position: position + 1,
                    expected,
                    found: columns[position].clone(),
                });
            }
        }

        if let Some(ninth) = columns.get(MANDATORY_COLUMNS.len()) {
            if ninth != FORMAT_COLUMN {
                return Err(HeaderError::SamplesWithoutFormat(ninth.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(HeaderError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self { columns })
    }

    /// Parse the text of a `#CHROM` line, splitting strictly on tabs
    ///
    /// # Errors
    ///
    /// Returns a [`HeaderError`] if the columns violate the header invariants.
    pub fn from_line(line: &str) -> Result<Self, HeaderError> {
        let body = line.strip_prefix('#').unwrap_or(line);
        Self::new(body.split('\t').map(str::to_string).collect())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Position of a column by name
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    #[must_use]
    pub fn has_format(&self) -> bool {
        self.format_index().is_some()
    }

    /// Position of the FORMAT column, if present
    #[must_use]
    pub fn format_index(&self) -> Option<usize> {
        match self.columns.get(MANDATORY_COLUMNS.len()) {
            Some(name) if name == FORMAT_COLUMN => Some(MANDATORY_COLUMNS.len()),
            _ => None,
        }
    }

    /// Sample identifiers, in column order
    #[must_use]
    pub fn samples(&self) -> &[String] {
        match self.format_index() {
            Some(i) => &self.columns[i + 1..],
            None => &[],
        }
    }

    /// Header line text, including the leading `#`, without a newline
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("#{}", self.columns.join("\t"))
    }

    pub(crate) fn push_column(&mut self, name: impl Into<String>) {
        self.columns.push(name.into());
    }
}
