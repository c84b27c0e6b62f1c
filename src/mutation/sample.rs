use tracing::{info, warn};

use crate::core::document::Document;
use crate::core::metadata::MetadataCategory;
use crate::core::types::SampleDeclaration;
use crate::mutation::{check_declaration_field, MutationError, SampleAdded};
use crate::utils::validation::{check_identifier, default_sample_value, tag_count, IdentifierKind};

impl Document {
    /// Declare a sample and add its column to the header and every record
    ///
    /// With `tag_values`, each record receives the corresponding string
    /// verbatim; it must have exactly as many colon-separated values as the
    /// record's FORMAT value has tags. Without it, each record receives a
    /// placeholder of `1` per tag (e.g. `1:1` for FORMAT `GT:DP`); a missing
    /// FORMAT value `.` stays `.`.
    ///
    /// # Errors
    ///
    /// Returns `MutationError::MissingFormatColumn` if the header has no FORMAT
    /// column, `MutationError::InvalidIdentifier` or `MutationError::DuplicateColumn`
    /// if the sample ID cannot become a new column,
    /// `MutationError::InvalidDeclaration` if a descriptive field contains a line
    /// break, `MutationError::RecordCountMismatch` if `tag_values` does not have
    /// one entry per record, `MutationError::InvalidSampleValue` if an entry
    /// contains a tab or line break, or `MutationError::TagCountMismatch` if an
    /// entry's value count differs from its record's FORMAT tag count.
    /// The document is left unchanged on error.
    pub fn add_sample(
        &mut self,
        sample: SampleDeclaration,
        tag_values: Option<Vec<String>>,
    ) -> Result<SampleAdded, MutationError> {
        let format_column = self
            .header
            .format_index()
            .ok_or(MutationError::MissingFormatColumn)?;

        if let Some(reason) = check_identifier(&sample.id, IdentifierKind::Sample) {
            return Err(MutationError::InvalidIdentifier {
                id: sample.id,
                reason,
            });
        }
        if self.header.contains(&sample.id) {
            return Err(MutationError::DuplicateColumn(sample.id));
        }
        check_declaration_field("assay", &sample.assay)?;
        check_declaration_field("ethnicity", &sample.ethnicity)?;
        check_declaration_field("disease", &sample.disease)?;
        check_declaration_field("tissue", &sample.tissue)?;
        check_declaration_field("description", &sample.description)?;

        let defaults_substituted = tag_values.is_none();
        let values = match tag_values {
            Some(values) => {
                self.check_tag_values(format_column, &values)?;
                values
            }
            None => self
                .records
                .iter()
                .map(|record| default_sample_value(record.value(format_column).unwrap_or_default()))
                .collect(),
        };

        // Validation is complete; nothing below can fail
        self.metadata
            .push(MetadataCategory::Sample, sample.to_metadata_line());
        self.header.push_column(sample.id.as_str());
        for (record, value) in self.records.iter_mut().zip(values) {
            record.push_value(value);
        }

        if defaults_substituted {
            warn!(
                "No tag values supplied for sample {}; set every tag to 1 in {} records",
                sample.id,
                self.records.len()
            );
        }
        info!("Added sample {} to {} records", sample.id, self.records.len());

        Ok(SampleAdded {
            id: sample.id,
            defaults_substituted,
        })
    }

    fn check_tag_values(&self, format_column: usize, values: &[String]) -> Result<(), MutationError> {
        if values.len() != self.records.len() {
            return Err(MutationError::RecordCountMismatch {
                expected: self.records.len(),
                got: values.len(),
            });
        }

        for (record_index, (record, value)) in self.records.iter().zip(values).enumerate() {
            if value.contains(['\t', '\n', '\r']) {
                return Err(MutationError::InvalidSampleValue { record_index });
            }
            let expected = tag_count(record.value(format_column).unwrap_or_default());
            let found = tag_count(value);
            if found != expected {
                return Err(MutationError::TagCountMismatch {
                    record_index,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }
}
