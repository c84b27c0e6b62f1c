use serde::Serialize;

use crate::core::header::Header;

/// One data line, stored positionally against the document header
///
/// Values are only created by the parser or by document mutations, both of
/// which keep `values.len() == header.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub(crate) fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Values in header column order
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value at a column position
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Value under a named column of `header`
    #[must_use]
    pub fn get(&self, header: &Header, column: &str) -> Option<&str> {
        header.index_of(column).and_then(|i| self.value(i))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Record line text, without a newline
    #[must_use]
    pub fn to_line(&self) -> String {
        self.values.join("\t")
    }

    pub(crate) fn push_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub(crate) fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        self.values.get_mut(index)
    }
}
