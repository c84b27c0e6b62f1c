//! Serializer from a [`Document`] back to VCF text.
//!
//! Output layout:
//!
//! ```text
//! ##fileformat=VCFv4.4            <- metadata, known categories in fixed order,
//! ##FORMAT=<ID=GT,...>               then extension categories
//! #CHROM  POS  ...  FORMAT  S1    <- header, tab-joined, newline-terminated
//! chr1    100  ...  GT      0/1   <- records in document order
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::document::Document;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not replace '{}': {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write a document as VCF text to any writer
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_document<W: Write>(document: &Document, mut out: W) -> std::io::Result<()> {
    for (_, lines) in document.metadata().iter() {
        for line in lines {
            writeln!(out, "{line}")?;
        }
    }

    writeln!(out, "{}", document.header().to_line())?;

    for record in document.records() {
        writeln!(out, "{}", record.to_line())?;
    }

    Ok(())
}

/// Render a document as VCF text
#[must_use]
pub fn render(document: &Document) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_document(document, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

/// Writes a document to a fixed output path
pub struct VcfWriter<'a> {
    output: PathBuf,
    document: &'a Document,
}

impl<'a> VcfWriter<'a> {
    pub fn new(output: impl Into<PathBuf>, document: &'a Document) -> Self {
        Self {
            output: output.into(),
            document,
        }
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Overwrite the output file with the current document
    ///
    /// The text is written to a temporary file in the destination directory
    /// and renamed into place, so the destination never holds a partial file.
    ///
    /// # Errors
    ///
    /// Returns `WriteError::Io` if the temporary file cannot be created or
    /// written, or `WriteError::Persist` if it cannot be renamed into place.
    pub fn update(&self) -> Result<(), WriteError> {
        let parent = match self.output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(&parent)?;
        debug!(
            "Writing VCF to temporary file {}",
            tmp.path().display()
        );

        {
            let mut out = std::io::BufWriter::new(tmp.as_file_mut());
            write_document(self.document, &mut out)?;
            out.flush()?;
        }
        tmp.as_file().sync_all()?;

        // Replacing an existing file keeps its mode
        if let Ok(existing) = std::fs::metadata(&self.output) {
            tmp.as_file().set_permissions(existing.permissions())?;
        }

        tmp.persist(&self.output).map_err(|e| WriteError::Persist {
            path: self.output.clone(),
            source: e.error,
        })?;

        info!(
            "Wrote {} records to {}",
            self.document.records().len(),
            self.output.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::vcf::parse_vcf_text;

    const VCF: &str = "##fileformat=VCFv4.4
##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNA1
chr1\t100\t.\tA\tT\t30\tPASS\t.\tGT\t0/1
";

    #[test]
    fn test_render_is_identity_for_canonical_input() {
        let doc = parse_vcf_text(VCF).unwrap();
        assert_eq!(render(&doc), VCF);
    }

    #[test]
    fn test_render_header_is_newline_terminated() {
        let doc = parse_vcf_text("#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n").unwrap();
        assert_eq!(render(&doc), "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n");
    }

    #[test]
    fn test_render_groups_metadata_by_category() {
        let vcf = "##FORMAT=<ID=GT>
##FOO=custom
##fileformat=VCFv4.4
##INFO=<ID=DP>
##FORMAT=<ID=DP>
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
";
        let doc = parse_vcf_text(vcf).unwrap();
        assert_eq!(
            render(&doc),
            "##fileformat=VCFv4.4
##INFO=<ID=DP>
##FORMAT=<ID=GT>
##FORMAT=<ID=DP>
##FOO=custom
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
"
        );
    }

    #[test]
    fn test_update_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.vcf");
        std::fs::write(&path, "stale content that is much longer than nothing\n").unwrap();

        let doc = parse_vcf_text(VCF).unwrap();
        VcfWriter::new(&path, &doc).update().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), VCF);
        // Only the destination remains; the temporary file was renamed
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_update_keeps_destination_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calls.vcf");
        std::fs::write(&path, VCF).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let mut doc = parse_vcf_text(VCF).unwrap();
        doc.add_format_field(
            "DP",
            crate::core::types::FormatNumber::Count(1),
            crate::core::types::FormatType::Integer,
            "Depth",
        )
        .unwrap();
        VcfWriter::new(&path, &doc).update().unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert!(std::fs::read_to_string(&path).unwrap().contains("GT:DP\t0/1:."));
    }

    #[test]
    fn test_update_missing_directory() {
        let doc = parse_vcf_text(VCF).unwrap();
        let writer = VcfWriter::new("/nonexistent/dir/out.vcf", &doc);
        assert_eq!(writer.output(), Path::new("/nonexistent/dir/out.vcf"));
        assert!(matches!(writer.update(), Err(WriteError::Io(_))));
    }
}
