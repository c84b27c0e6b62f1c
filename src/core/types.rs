use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Value used for descriptive sample attributes that were not supplied
pub const NOT_AVAILABLE: &str = "NA";

/// `Number` attribute of a FORMAT declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatNumber {
    /// Fixed number of values
    Count(u32),
    /// One value per alternate allele
    PerAltAllele,
    /// One value per allele, including the reference
    PerAllele,
    /// One value per possible genotype
    PerGenotype,
    /// Unknown or varying number of values
    Unbounded,
}

impl std::fmt::Display for FormatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::PerAltAllele => write!(f, "A"),
            Self::PerAllele => write!(f, "R"),
            Self::PerGenotype => write!(f, "G"),
            Self::Unbounded => write!(f, "."),
        }
    }
}

impl FromStr for FormatNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(Self::PerAltAllele),
            "R" => Ok(Self::PerAllele),
            "G" => Ok(Self::PerGenotype),
            "." => Ok(Self::Unbounded),
            other => other
                .parse::<u32>()
                .map(Self::Count)
                .map_err(|_| format!("invalid FORMAT Number '{other}' (expected integer, A, R, G or .)")),
        }
    }
}

/// `Type` attribute of a FORMAT declaration
///
/// `Flag` is not a legal FORMAT type in VCF, so it is not representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatType {
    Integer,
    Float,
    Character,
    String,
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
            Self::Character => write!(f, "Character"),
            Self::String => write!(f, "String"),
        }
    }
}

impl FromStr for FormatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "character" => Ok(Self::Character),
            "string" => Ok(Self::String),
            _ => Err(format!(
                "invalid FORMAT Type '{s}' (expected Integer, Float, Character or String)"
            )),
        }
    }
}

/// A genotype tag declaration, rendered as a `##FORMAT=<...>` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDeclaration {
    pub id: String,
    pub number: FormatNumber,
    pub ty: FormatType,
    pub description: String,
}

impl FormatDeclaration {
    pub fn new(
        id: impl Into<String>,
        number: FormatNumber,
        ty: FormatType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            ty,
            description: description.into(),
        }
    }

    /// Canonical metadata line for this declaration
    #[must_use]
    pub fn to_metadata_line(&self) -> String {
        format!(
            "##FORMAT=<ID={},Number={},Type={},Description=\"{}\">",
            self.id, self.number, self.ty, self.description
        )
    }
}

/// A sample declaration, rendered as a `##SAMPLE=<...>` line
///
/// Every descriptive attribute defaults to `NA`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDeclaration {
    pub id: String,
    pub assay: String,
    pub ethnicity: String,
    pub disease: String,
    pub tissue: String,
    pub description: String,
}

impl SampleDeclaration {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assay: NOT_AVAILABLE.to_string(),
            ethnicity: NOT_AVAILABLE.to_string(),
            disease: NOT_AVAILABLE.to_string(),
            tissue: NOT_AVAILABLE.to_string(),
            description: NOT_AVAILABLE.to_string(),
        }
    }

    #[must_use]
    pub fn with_assay(mut self, assay: impl Into<String>) -> Self {
        self.assay = assay.into();
        self
    }

    #[must_use]
    pub fn with_ethnicity(mut self, ethnicity: impl Into<String>) -> Self {
        self.ethnicity = ethnicity.into();
        self
    }

    #[must_use]
    pub fn with_disease(mut self, disease: impl Into<String>) -> Self {
        self.disease = disease.into();
        self
    }

    #[must_use]
    pub fn with_tissue(mut self, tissue: impl Into<String>) -> Self {
        self.tissue = tissue.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Canonical metadata line for this declaration
    #[must_use]
    pub fn to_metadata_line(&self) -> String {
        format!(
            "##SAMPLE=<ID={},Assay={},Ethnicity={},Disease={},Tissue={},Description=\"{}\">",
            self.id, self.assay, self.ethnicity, self.disease, self.tissue, self.description
        )
    }
}
