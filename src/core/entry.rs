use serde::{Deserialize, Serialize};

use crate::core::types::Classification;

/// Metadata emitted for one logical reference sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedEntry {
    /// Identifier from the FASTA file (strand suffix removed for merged pairs)
    pub identifier: String,

    /// Short name, unique within the run
    pub alias: String,

    /// Sequence length including `N` placeholders
    pub length: u64,

    /// Sequence length excluding uppercase `N` placeholders
    pub length_without_n: u64,

    pub classification: Classification,
}

impl AnnotatedEntry {
    /// Render as a Groovy constructor call, one element of a list literal:
    ///
    /// ```text
    /// new FastaEntry("chr1", "1", 249250621, 225280621, Classification.CHROMOSOME),
    /// ```
    #[must_use]
    pub fn groovy_literal(&self) -> String {
        format!(
            "new FastaEntry(\"{}\", \"{}\", {}, {}, Classification.{}),",
            escape_groovy(&self.identifier),
            escape_groovy(&self.alias),
            self.length,
            self.length_without_n,
            self.classification.tag(),
        )
    }

    /// Render in the older list-of-lists format, which carries neither alias
    /// nor classification.
    #[must_use]
    pub fn legacy_literal(&self) -> String {
        let identifier = escape_groovy(&self.identifier);
        format!(
            "[\"{identifier}\", \"{identifier}\", {}, {}, \"UNDEFINED\"],",
            self.length, self.length_without_n,
        )
    }

    #[must_use]
    pub fn tsv_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.identifier,
            self.alias,
            self.length,
            self.length_without_n,
            self.classification,
        )
    }
}

/// Escape characters that are special inside a double-quoted Groovy string.
/// Plain sequence names pass through unchanged.
fn escape_groovy(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '"' | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chr1() -> AnnotatedEntry {
        AnnotatedEntry {
            identifier: "chr1".to_string(),
            alias: "1".to_string(),
            length: 249_250_621,
            length_without_n: 225_280_621,
            classification: Classification::Chromosome,
        }
    }

    #[test]
    fn test_groovy_literal() {
        assert_eq!(
            chr1().groovy_literal(),
            "new FastaEntry(\"chr1\", \"1\", 249250621, 225280621, Classification.CHROMOSOME),"
        );
    }

    #[test]
    fn test_legacy_literal_ignores_alias_and_classification() {
        assert_eq!(
            chr1().legacy_literal(),
            "[\"chr1\", \"chr1\", 249250621, 225280621, \"UNDEFINED\"],"
        );
    }

    #[test]
    fn test_tsv_row() {
        assert_eq!(chr1().tsv_row(), "chr1\t1\t249250621\t225280621\tCHROMOSOME");
    }

    #[test]
    fn test_groovy_escaping() {
        let mut entry = chr1();
        entry.identifier = "odd\"name$x".to_string();
        entry.alias = entry.identifier.clone();
        entry.classification = Classification::Undefined;
        assert_eq!(
            entry.groovy_literal(),
            "new FastaEntry(\"odd\\\"name\\$x\", \"odd\\\"name\\$x\", 249250621, 225280621, Classification.UNDEFINED),"
        );
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(chr1()).unwrap();
        assert_eq!(value["identifier"], "chr1");
        assert_eq!(value["length_without_n"], 225_280_621);
        assert_eq!(value["classification"], "CHROMOSOME");
    }
}
