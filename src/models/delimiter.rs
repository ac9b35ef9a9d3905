//! Record delimiters and how they were chosen

use serde::Serialize;
use std::fmt;

/// Prefix that marks the first line of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Delimiter {
    /// FASTA header line (`>`)
    Fasta,
    /// FASTQ header line (`@`)
    Fastq,
    /// User-supplied prefix such as `LOCUS`
    Custom(String),
}

impl Delimiter {
    /// Returns the literal line prefix
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Fasta => ">",
            Delimiter::Fastq => "@",
            Delimiter::Custom(s) => s,
        }
    }

    /// Returns the format name used in progress messages
    pub fn format_name(&self) -> &'static str {
        match self {
            Delimiter::Fasta => "FASTA",
            Delimiter::Fastq => "FASTQ",
            Delimiter::Custom(_) => "custom",
        }
    }

    /// Builds a delimiter from a raw string, mapping the well-known prefixes.
    /// Returns `None` when the string is empty after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" => None,
            ">" => Some(Delimiter::Fasta),
            "@" => Some(Delimiter::Fastq),
            other => Some(Delimiter::Custom(other.to_string())),
        }
    }

    /// True if `line` starts a record
    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(self.as_str())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Delimiter> for String {
    fn from(d: Delimiter) -> Self {
        d.as_str().to_string()
    }
}

/// Where a resolved delimiter came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterOrigin {
    /// Set up front via CLI or config
    Preset,
    /// Found on the given 0-based line
    AutoDetected { line: usize },
    /// Supplied by the fallback source after detection failed
    Provided,
}

/// A delimiter together with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub delimiter: Delimiter,
    pub origin: DelimiterOrigin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_prefixes() {
        assert_eq!(Delimiter::parse(">"), Some(Delimiter::Fasta));
        assert_eq!(Delimiter::parse(" @ "), Some(Delimiter::Fastq));
        assert_eq!(
            Delimiter::parse("LOCUS\n"),
            Some(Delimiter::Custom("LOCUS".to_string()))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Delimiter::parse(""), None);
        assert_eq!(Delimiter::parse("  \t"), None);
    }

    #[test]
    fn test_matches_prefix_only() {
        let d = Delimiter::Custom("LOCUS".to_string());
        assert!(d.matches("LOCUS       AB000263\n"));
        assert!(!d.matches("  LOCUS\n"));
        assert!(Delimiter::Fasta.matches(">seq1"));
        assert!(!Delimiter::Fasta.matches("ACGT>"));
    }

    #[test]
    fn test_serializes_as_prefix() {
        let json = serde_json::to_string(&Delimiter::Fastq).unwrap();
        assert_eq!(json, "\"@\"");
        let json = serde_json::to_string(&Delimiter::Custom("LOCUS".into())).unwrap();
        assert_eq!(json, "\"LOCUS\"");
    }
}
