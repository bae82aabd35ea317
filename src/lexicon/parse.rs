//! Record parsing for the lexical network.
//!
//! Two line-oriented text formats are consumed here:
//!
//! - **Synonym records**: `id,term1 term2 term3 ...` - an integer concept
//!   identifier followed by a space-separated synonym list. Any further
//!   comma-separated fields (such as a gloss) are ignored.
//! - **Hypernym records**: `id,parent1,parent2,...` - each listed parent
//!   declares one edge from the specific concept to the more general one. A
//!   line with no parents is valid and declares nothing.
//!
//! Blank lines are skipped in both formats. Parse failures report the 1-based
//! line number of the offending record.

use std::collections::HashMap;

use crate::{Error, Result};

/// The synonym tables extracted from a synonym record set.
///
/// Identifiers are kept raw here; the network layer converts them to vertex
/// identifiers once the graph size is known.
#[derive(Debug, Default)]
pub(crate) struct SynonymTable {
    /// Concept id to its full synset string (last record wins per id)
    pub synsets: HashMap<usize, String>,
    /// Term to the first concept id it appeared under
    pub term_ids: HashMap<String, usize>,
}

/// Parses a synonym record set.
///
/// The same term appearing under two ids resolves to whichever id was seen
/// first; a repeated id keeps the synset string of its last record.
pub(crate) fn parse_synonyms(input: &str) -> Result<SynonymTable> {
    let mut table = SynonymTable::default();

    for (number, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, ',');
        let id_field = fields.next().unwrap_or("");
        let Some(synset) = fields.next() else {
            return Err(Error::MalformedRecord {
                message: "synonym record needs an id field and a synonym field".to_string(),
                line: number + 1,
            });
        };

        let id = parse_id(id_field, number + 1)?;

        for term in synset.split_whitespace() {
            table.term_ids.entry(term.to_string()).or_insert(id);
        }
        table.synsets.insert(id, synset.to_string());
    }

    Ok(table)
}

/// Parses a hypernym record set into `(child, parent)` id pairs.
///
/// Pairs are produced in record order; one record contributes one pair per
/// listed parent.
pub(crate) fn parse_hypernyms(input: &str) -> Result<Vec<(usize, usize)>> {
    let mut edges = Vec::new();

    for (number, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let id_field = fields.next().unwrap_or("");
        let child = parse_id(id_field, number + 1)?;

        for parent_field in fields {
            let parent = parse_id(parent_field, number + 1)?;
            edges.push((child, parent));
        }
    }

    Ok(edges)
}

/// Parses one id field, rejecting non-numeric and negative values.
fn parse_id(field: &str, line: usize) -> Result<usize> {
    field
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::MalformedRecord {
            message: format!("id is not a non-negative integer: {field:?}"),
            line,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synonyms_basic() {
        let table = parse_synonyms("0,alpha beta\n1,gamma\n").unwrap();

        assert_eq!(table.synsets.len(), 2);
        assert_eq!(table.synsets[&0], "alpha beta");
        assert_eq!(table.synsets[&1], "gamma");

        assert_eq!(table.term_ids["alpha"], 0);
        assert_eq!(table.term_ids["beta"], 0);
        assert_eq!(table.term_ids["gamma"], 1);
    }

    #[test]
    fn test_parse_synonyms_first_writer_wins() {
        let table = parse_synonyms("0,word\n1,word other\n").unwrap();

        assert_eq!(table.term_ids["word"], 0);
        assert_eq!(table.term_ids["other"], 1);
    }

    #[test]
    fn test_parse_synonyms_ignores_gloss_field() {
        let table = parse_synonyms("0,alpha beta,first letter of the alphabet\n").unwrap();

        assert_eq!(table.synsets[&0], "alpha beta");
        assert!(table.term_ids.contains_key("alpha"));
        assert!(!table.term_ids.contains_key("letter"));
    }

    #[test]
    fn test_parse_synonyms_skips_blank_lines() {
        let table = parse_synonyms("\n0,alpha\n\n1,beta\n\n").unwrap();
        assert_eq!(table.synsets.len(), 2);
    }

    #[test]
    fn test_parse_synonyms_missing_field() {
        let result = parse_synonyms("0,alpha\n17\n");
        assert!(matches!(
            result,
            Err(Error::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_synonyms_bad_id() {
        let result = parse_synonyms("zero,alpha\n");
        assert!(matches!(
            result,
            Err(Error::MalformedRecord { line: 1, .. })
        ));

        let result = parse_synonyms("0,alpha\n-1,beta\n");
        assert!(matches!(
            result,
            Err(Error::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_hypernyms_basic() {
        let edges = parse_hypernyms("0,2\n1,2,3\n").unwrap();
        assert_eq!(edges, vec![(0, 2), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_parse_hypernyms_record_without_parents() {
        let edges = parse_hypernyms("4\n0,4\n").unwrap();
        assert_eq!(edges, vec![(0, 4)]);
    }

    #[test]
    fn test_parse_hypernyms_empty_input() {
        let edges = parse_hypernyms("").unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_parse_hypernyms_bad_parent() {
        let result = parse_hypernyms("0,2\n1,two\n");
        assert!(matches!(
            result,
            Err(Error::MalformedRecord { line: 2, .. })
        ));
    }
}
