use tracing::{debug, info};

use crate::core::document::Document;
use crate::core::header::FORMAT_COLUMN;
use crate::core::metadata::MetadataCategory;
use crate::core::types::{FormatDeclaration, FormatNumber, FormatType};
use crate::mutation::{check_declaration_field, FormatFieldAdded, MutationError};
use crate::utils::validation::{check_identifier, tag_count, IdentifierKind, MISSING_VALUE, TAG_SEPARATOR};

impl Document {
    /// Declare a FORMAT tag and append it to every record
    ///
    /// See [`Document::add_format_declaration`].
    ///
    /// # Errors
    ///
    /// Returns a [`MutationError`] if the tag cannot be added; the document is
    /// left unchanged.
    pub fn add_format_field(
        &mut self,
        id: &str,
        number: FormatNumber,
        ty: FormatType,
        description: &str,
    ) -> Result<FormatFieldAdded, MutationError> {
        self.add_format_declaration(FormatDeclaration::new(id, number, ty, description))
    }

    /// Declare a FORMAT tag and append it to every record
    ///
    /// If the header has no FORMAT column, one is added and every record's
    /// FORMAT value becomes the new ID. Otherwise `:ID` is appended to every
    /// record's FORMAT value and every existing sample value gets `:.` so that
    /// samples keep one value per tag.
    ///
    /// # Errors
    ///
    /// Returns `MutationError::InvalidIdentifier` if the ID cannot appear in a
    /// FORMAT value, `MutationError::DuplicateFormatId` if a FORMAT tag with the
    /// same ID is already declared, or `MutationError::InvalidDeclaration` if the
    /// description contains a line break. The document is left unchanged.
    pub fn add_format_declaration(
        &mut self,
        declaration: FormatDeclaration,
    ) -> Result<FormatFieldAdded, MutationError> {
        if let Some(reason) = check_identifier(&declaration.id, IdentifierKind::FormatTag) {
            return Err(MutationError::InvalidIdentifier {
                id: declaration.id,
                reason,
            });
        }
        check_declaration_field("description", &declaration.description)?;
        if self.metadata.declares_format(&declaration.id) {
            return Err(MutationError::DuplicateFormatId(declaration.id));
        }

        // Validation is complete; nothing below can fail
        self.metadata
            .push(MetadataCategory::Format, declaration.to_metadata_line());

        let id = declaration.id;
        let mut padded_sample_values = 0;
        let created_format_column = match self.header.format_index() {
            None => {
                self.header.push_column(FORMAT_COLUMN);
                for record in &mut self.records {
                    record.push_value(id.as_str());
                }
                true
            }
            Some(format_column) => {
                let sample_columns = format_column + 1..self.header.len();
                for record in &mut self.records {
                    if let Some(format) = record.value_mut(format_column) {
                        format.push(TAG_SEPARATOR);
                        format.push_str(&id);
                    }
                    for column in sample_columns.clone() {
                        if let Some(value) = record.value_mut(column) {
                            value.push(TAG_SEPARATOR);
                            value.push_str(MISSING_VALUE);
                            padded_sample_values += 1;
                        }
                    }
                }
                false
            }
        };

        let tag_counts: Vec<usize> = (0..self.records.len())
            .filter_map(|i| self.format_of(i).map(tag_count))
            .collect();

        if padded_sample_values > 0 {
            debug!("Padded {padded_sample_values} existing sample values with '{MISSING_VALUE}'");
        }
        info!(
            "Added FORMAT tag {id} to {} records{}",
            self.records.len(),
            if created_format_column {
                " (created FORMAT column)"
            } else {
                ""
            }
        );

        Ok(FormatFieldAdded {
            id,
            created_format_column,
            tag_counts,
            padded_sample_values,
        })
    }
}
