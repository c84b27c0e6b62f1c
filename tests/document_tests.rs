//! End-to-end document tests
//!
//! Parse, extend, write, and re-parse VCF files through the public API, checking
//! that every edit keeps metadata, header, and records consistent and that
//! failed edits change nothing.

use vcf_edit::parsing::vcf::{parse_vcf_text, parse_vcf_text_with};
use vcf_edit::utils::validation::tag_count;
use vcf_edit::writing::vcf::render;
use vcf_edit::{
    Document, FormatNumber, FormatType, MetadataCategory, MutationError, ParseError, ParserConfig,
    SampleDeclaration, VcfWriter,
};

const SITES_ONLY: &str = "##fileformat=VCFv4.4
##INFO=<ID=DP,Number=1,Type=Integer,Description=\"Total depth\">
##contig=<ID=chr1,length=248956422>
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
chr1\t100\trs1\tA\tT\t30\tPASS\tDP=10
chr1\t200\t.\tG\tC\t12\tPASS\tDP=4
";

fn genotyped() -> Document {
    let mut doc = parse_vcf_text(SITES_ONLY).unwrap();
    doc.add_format_field("GT", FormatNumber::Count(1), FormatType::String, "Genotype")
        .unwrap();
    doc
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn assert_invariants(doc: &Document) {
    let header = doc.header();
    for (i, record) in doc.records().iter().enumerate() {
        assert_eq!(record.len(), header.len(), "record {i} arity");
        if let Some(format) = doc.format_of(i) {
            for sample in header.samples() {
                let value = record.get(header, sample).unwrap();
                assert_eq!(tag_count(value), tag_count(format), "record {i} sample {sample}");
            }
        }
    }
}

/// Parse a sites-only file and add a FORMAT field
#[test]
fn test_add_format_to_sites_only_file() {
    let doc = genotyped();

    assert_eq!(doc.header().columns().last().unwrap(), "FORMAT");
    assert_eq!(doc.format_of(0), Some("GT"));
    assert_eq!(doc.format_of(1), Some("GT"));
    assert_invariants(&doc);
}

/// Add a sample with explicit values
#[test]
fn test_add_sample_with_values() {
    let mut doc = genotyped();
    doc.add_sample(SampleDeclaration::new("S1"), Some(strings(&["0/1", "1/1"])))
        .unwrap();

    let header = doc.header();
    assert_eq!(&header.columns()[8..], &strings(&["FORMAT", "S1"])[..]);
    assert_eq!(doc.records()[0].get(header, "S1"), Some("0/1"));
    assert_eq!(doc.records()[1].get(header, "S1"), Some("1/1"));
    assert_invariants(&doc);
}

/// Add a sample without values
#[test]
fn test_add_sample_default_values() {
    let mut doc = genotyped();
    let added = doc.add_sample(SampleDeclaration::new("S1"), None).unwrap();

    assert!(added.defaults_substituted);
    for record in doc.records() {
        assert_eq!(record.get(doc.header(), "S1"), Some("1"));
    }
}

/// Too few values leaves the document untouched
#[test]
fn test_add_sample_record_count_mismatch_is_atomic() {
    let mut doc = genotyped();
    doc.add_sample(SampleDeclaration::new("S1"), Some(strings(&["0/1", "1/1"])))
        .unwrap();
    let before = doc.clone();
    let text_before = render(&doc);

    let result = doc.add_sample(SampleDeclaration::new("S2"), Some(strings(&["0/1"])));

    assert_eq!(
        result,
        Err(MutationError::RecordCountMismatch {
            expected: 2,
            got: 1
        })
    );
    assert_eq!(doc, before);
    assert_eq!(render(&doc), text_before);
}

/// Unknown metadata is kept by default and rejected under the strict policy
#[test]
fn test_unknown_metadata_category() {
    let vcf = "##fileformat=VCFv4.4
##FOO=bar
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
";
    let doc = parse_vcf_text(vcf).unwrap();
    let foo = MetadataCategory::Other("FOO".to_string());
    assert_eq!(doc.metadata().lines(&foo), &strings(&["##FOO=bar"])[..]);
    assert_eq!(render(&doc), vcf);

    let strict = parse_vcf_text_with(vcf, &ParserConfig::strict());
    assert!(matches!(
        strict,
        Err(ParseError::UnknownMetadataCategory { ref key, line: 2 }) if key == "FOO"
    ));
}

/// Samples require a FORMAT column
#[test]
fn test_add_sample_before_format() {
    let mut doc = parse_vcf_text(SITES_ONLY).unwrap();
    let before = doc.clone();

    let result = doc.add_sample(SampleDeclaration::new("S1"), None);

    assert_eq!(result, Err(MutationError::MissingFormatColumn));
    assert_eq!(doc, before);
    assert!(doc.metadata().lines(&MetadataCategory::Sample).is_empty());
}

#[test]
fn test_round_trip_after_edits() {
    let mut doc = genotyped();
    doc.add_format_field("DP", FormatNumber::Count(1), FormatType::Integer, "Read depth")
        .unwrap();
    doc.add_sample(
        SampleDeclaration::new("S1")
            .with_assay("WGS")
            .with_tissue("Blood")
            .with_description("Proband"),
        Some(strings(&["0/1:10", "1/1:4"])),
    )
    .unwrap();
    doc.add_sample(SampleDeclaration::new("S 2"), None).unwrap();

    let text = render(&doc);
    let reparsed = parse_vcf_text(&text).unwrap();
    assert_eq!(reparsed, doc);
    assert_invariants(&reparsed);
    assert_eq!(render(&reparsed), text);
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.vcf");
    let output = dir.path().join("out.vcf");
    std::fs::write(&input, SITES_ONLY).unwrap();

    let mut doc = Document::from_path(&input).unwrap();
    doc.add_format_field("GT", FormatNumber::Count(1), FormatType::String, "Genotype")
        .unwrap();
    doc.add_sample(SampleDeclaration::new("S1"), Some(strings(&["0/1", "0/0"])))
        .unwrap();
    VcfWriter::new(&output, &doc).update().unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\n"));
    assert!(written.ends_with("chr1\t200\t.\tG\tC\t12\tPASS\tDP=4\tGT\t0/0\n"));

    let reparsed = Document::from_path(&output).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn test_update_in_place_replaces_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calls.vcf");
    std::fs::write(&path, SITES_ONLY).unwrap();

    let mut doc = Document::from_path(&path).unwrap();
    doc.add_format_field("GT", FormatNumber::Count(1), FormatType::String, "Genotype")
        .unwrap();
    VcfWriter::new(&path, &doc).update().unwrap();

    let reparsed = Document::from_path(&path).unwrap();
    assert!(reparsed.header().has_format());
    assert_eq!(reparsed.metadata().format_ids().collect::<Vec<_>>(), vec!["GT"]);
}

#[test]
fn test_failed_format_addition_is_atomic() {
    let mut doc = genotyped();
    doc.add_sample(SampleDeclaration::new("S1"), None).unwrap();
    let before = doc.clone();

    assert_eq!(
        doc.add_format_field("GT", FormatNumber::Count(1), FormatType::String, "Genotype"),
        Err(MutationError::DuplicateFormatId("GT".to_string()))
    );
    assert!(matches!(
        doc.add_format_field("A:B", FormatNumber::Count(1), FormatType::String, "bad"),
        Err(MutationError::InvalidIdentifier { .. })
    ));
    assert_eq!(doc, before);
}

#[test]
fn test_existing_format_declarations_block_duplicates() {
    let vcf = "##fileformat=VCFv4.4
##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">
##FORMAT=<ID=DP,Number=1,Type=Integer,Description=\"Depth\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNA1\tNA2
chr1\t100\t.\tA\tT\t30\tPASS\t.\tGT:DP\t0/1:12\t0/0:8
";
    let mut doc = parse_vcf_text(vcf).unwrap();

    assert_eq!(
        doc.add_format_field("DP", FormatNumber::Count(1), FormatType::Integer, "Depth"),
        Err(MutationError::DuplicateFormatId("DP".to_string()))
    );

    let added = doc
        .add_format_field("GQ", FormatNumber::Count(1), FormatType::Integer, "Genotype quality")
        .unwrap();
    assert_eq!(added.tag_counts, vec![3]);
    assert_eq!(added.padded_sample_values, 2);

    let header = doc.header();
    assert_eq!(doc.records()[0].get(header, "NA1"), Some("0/1:12:."));
    assert_eq!(doc.records()[0].get(header, "NA2"), Some("0/0:8:."));
    assert_invariants(&doc);
}

#[test]
fn test_sample_value_tag_count_must_match_each_record() {
    let vcf = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT
chr1\t100\t.\tA\tT\t30\tPASS\t.\tGT
chr1\t200\t.\tG\tC\t30\tPASS\t.\tGT:DP
";
    let mut doc = parse_vcf_text(vcf).unwrap();
    let before = doc.clone();

    // Per-record FORMAT values differ, so the values must follow each record
    assert_eq!(
        doc.add_sample(SampleDeclaration::new("S1"), Some(strings(&["0/1", "0/1"]))),
        Err(MutationError::TagCountMismatch {
            record_index: 1,
            expected: 2,
            found: 1
        })
    );
    assert_eq!(doc, before);

    doc.add_sample(SampleDeclaration::new("S1"), Some(strings(&["0/1", "0/1:7"])))
        .unwrap();
    doc.add_sample(SampleDeclaration::new("S2"), None).unwrap();
    assert_eq!(doc.records()[0].get(doc.header(), "S2"), Some("1"));
    assert_eq!(doc.records()[1].get(doc.header(), "S2"), Some("1:1"));
    assert_invariants(&doc);
}

#[test]
fn test_writer_fixes_header_record_separation() {
    let doc = parse_vcf_text(SITES_ONLY).unwrap();
    let text = render(&doc);
    assert!(text.contains("INFO\nchr1\t100"));
    assert_eq!(text, SITES_ONLY);
}
