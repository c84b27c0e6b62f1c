use serde::Serialize;

/// Category of a `##KEY=...` metadata line
///
/// Known VCF categories get their own variant; anything else is kept as
/// [`MetadataCategory::Other`] so that custom metadata survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataCategory {
    FileFormat,
    FileDate,
    Reference,
    Phasing,
    Info,
    Filter,
    Format,
    Alt,
    Assembly,
    Contig,
    Sample,
    Pedigree,
    Other(String),
}

impl MetadataCategory {
    /// Known categories in emit order
    pub const KNOWN: [MetadataCategory; 12] = [
        Self::FileFormat,
        Self::FileDate,
        Self::Reference,
        Self::Phasing,
        Self::Info,
        Self::Filter,
        Self::Format,
        Self::Alt,
        Self::Assembly,
        Self::Contig,
        Self::Sample,
        Self::Pedigree,
    ];

    /// Map a metadata key to a known category
    #[must_use]
    pub fn from_known_key(key: &str) -> Option<Self> {
        match key {
            "fileformat" => Some(Self::FileFormat),
            "fileDate" => Some(Self::FileDate),
            "reference" => Some(Self::Reference),
            "phasing" => Some(Self::Phasing),
            "INFO" => Some(Self::Info),
            "FILTER" => Some(Self::Filter),
            "FORMAT" => Some(Self::Format),
            "ALT" => Some(Self::Alt),
            "assembly" => Some(Self::Assembly),
            "contig" => Some(Self::Contig),
            "SAMPLE" => Some(Self::Sample),
            "PEDIGREE" => Some(Self::Pedigree),
            _ => None,
        }
    }

    /// Key as written between `##` and `=`
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::FileFormat => "fileformat",
            Self::FileDate => "fileDate",
            Self::Reference => "reference",
            Self::Phasing => "phasing",
            Self::Info => "INFO",
            Self::Filter => "FILTER",
            Self::Format => "FORMAT",
            Self::Alt => "ALT",
            Self::Assembly => "assembly",
            Self::Contig => "contig",
            Self::Sample => "SAMPLE",
            Self::Pedigree => "PEDIGREE",
            Self::Other(key) => key,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    fn rank(&self) -> Option<usize> {
        Self::KNOWN.iter().position(|c| c == self)
    }
}

impl std::fmt::Display for MetadataCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Metadata lines grouped by category
///
/// Lines keep their declaration order within a category. Iteration yields the
/// known categories in [`MetadataCategory::KNOWN`] order, followed by
/// extension categories in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    sections: Vec<MetadataSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct MetadataSection {
    category: MetadataCategory,
    lines: Vec<String>,
}

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines stored under a category, empty if none
    #[must_use]
    pub fn lines(&self, category: &MetadataCategory) -> &[String] {
        self.sections
            .iter()
            .find(|s| &s.category == category)
            .map(|s| s.lines.as_slice())
            .unwrap_or(&[])
    }

    /// Append a line to a category, creating the category if needed
    pub fn push(&mut self, category: MetadataCategory, line: impl Into<String>) {
        let line = line.into();
        if let Some(section) = self.sections.iter_mut().find(|s| s.category == category) {
            section.lines.push(line);
            return;
        }

        // Keep known categories ahead of extensions so iteration is a plain walk
        let position = match category.rank() {
            Some(rank) => self
                .sections
                .iter()
                .position(|s| s.category.rank().map_or(true, |r| r > rank))
                .unwrap_or(self.sections.len()),
            None => self.sections.len(),
        };
        self.sections.insert(
            position,
            MetadataSection {
                category,
                lines: vec![line],
            },
        );
    }

    /// Non-empty categories with their lines, in emit order
    pub fn iter(&self) -> impl Iterator<Item = (&MetadataCategory, &[String])> {
        self.sections
            .iter()
            .filter(|s| !s.lines.is_empty())
            .map(|s| (&s.category, s.lines.as_slice()))
    }

    /// Total number of metadata lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// IDs declared by `##FORMAT=<ID=...>` lines
    pub fn format_ids(&self) -> impl Iterator<Item = &str> {
        self.lines(&MetadataCategory::Format)
            .iter()
            .filter_map(|line| declared_id(line))
    }

    /// Whether a FORMAT tag with this ID has been declared
    #[must_use]
    pub fn declares_format(&self, id: &str) -> bool {
        self.format_ids().any(|declared| declared == id)
    }
}

/// Extract the `ID=` value from a structured `##KEY=<ID=...,...>` line
fn declared_id(line: &str) -> Option<&str> {
    let (_, value) = line.split_once('=')?;
    let body = value.strip_prefix('<')?;
    body.split(',')
        .find_map(|field| field.trim().strip_prefix("ID="))
        .map(|id| id.trim_end_matches('>'))
}
