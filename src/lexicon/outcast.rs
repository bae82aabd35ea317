//! Outcast selection over a lexical network.
//!
//! Given a list of terms, the *outcast* is the term with the greatest total
//! semantic distance to all the other terms in the list. This is a thin O(n²)
//! consumer of the network's ancestral-distance query.

use crate::{lexicon::LexicalNetwork, Error, Result};

/// Picks the semantically most distant member of a term list.
///
/// Pairwise distances are the symmetric ancestral distances of
/// [`LexicalNetwork::id_distance`]: two sibling concepts meeting at a shared
/// hypernym count the hops through that meeting point, regardless of edge
/// direction.
///
/// # Examples
///
/// ```rust
/// use lexigraph::{LexicalNetwork, Outcast};
///
/// let synonyms = "0,dog\n1,cat\n2,carnivore\n3,pebble\n4,entity\n";
/// let hypernyms = "0,2\n1,2\n2,4\n3,4\n";
///
/// let network = LexicalNetwork::new(synonyms, hypernyms)?;
/// let outcast = Outcast::new(&network);
///
/// // The pebble is far from both animals
/// assert_eq!(outcast.outcast(&["dog", "cat", "pebble"])?, "pebble");
/// # Ok::<(), lexigraph::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'n> {
    /// The distance oracle
    network: &'n LexicalNetwork,
}

impl<'n> Outcast<'n> {
    /// Creates an outcast selector over the given network.
    #[must_use]
    pub fn new(network: &'n LexicalNetwork) -> Self {
        Outcast { network }
    }

    /// Returns the term of `terms` maximizing the sum of pairwise distances to
    /// all other terms in the list.
    ///
    /// Pairs with no common ancestor contribute nothing to a term's sum. Ties
    /// keep the first term whose sum strictly exceeded the best seen before
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySubset`] for an empty list and
    /// [`Error::UnknownTerm`] if any list member is not in the network.
    pub fn outcast<'t>(&self, terms: &[&'t str]) -> Result<&'t str> {
        if terms.is_empty() {
            return Err(Error::EmptySubset);
        }

        let mut best: Option<(usize, &'t str)> = None;
        for (i, &candidate) in terms.iter().enumerate() {
            let mut sum = 0;
            for (j, &other) in terms.iter().enumerate() {
                if i != j {
                    sum += self.term_distance(candidate, other)?.unwrap_or(0);
                }
            }

            if best.is_none_or(|(greatest, _)| sum > greatest) {
                best = Some((sum, candidate));
            }
        }

        // The list is non-empty, so a best entry exists
        Ok(best.map(|(_, term)| term).unwrap_or(terms[0]))
    }

    /// Symmetric ancestral distance between the concepts of two terms.
    fn term_distance(&self, first: &str, second: &str) -> Result<Option<usize>> {
        let a = self
            .network
            .id(first)
            .ok_or_else(|| Error::UnknownTerm(first.to_string()))?;
        let b = self
            .network
            .id(second)
            .ok_or_else(|| Error::UnknownTerm(second.to_string()))?;
        self.network.id_distance(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYNONYMS: &str = "\
0,dog
1,cat
2,carnivore
3,pebble stone
4,entity
";

    const HYPERNYMS: &str = "\
0,2
1,2
2,4
3,4
";

    fn create_network() -> LexicalNetwork {
        LexicalNetwork::new(SYNONYMS, HYPERNYMS).unwrap()
    }

    #[test]
    fn test_outcast_picks_most_distant_term() {
        let network = create_network();
        let outcast = Outcast::new(&network);

        // dog-cat meet at carnivore (2 hops), either animal meets pebble only
        // at entity (3 hops); pebble's total of 6 wins
        assert_eq!(outcast.outcast(&["dog", "cat", "pebble"]).unwrap(), "pebble");
    }

    #[test]
    fn test_outcast_single_term() {
        let network = create_network();
        let outcast = Outcast::new(&network);

        assert_eq!(outcast.outcast(&["dog"]).unwrap(), "dog");
    }

    #[test]
    fn test_outcast_tie_keeps_first_term() {
        let network = create_network();
        let outcast = Outcast::new(&network);

        // dog and cat are symmetric around carnivore; neither strictly beats
        // the other, so the first stays selected
        assert_eq!(outcast.outcast(&["dog", "cat"]).unwrap(), "dog");
    }

    #[test]
    fn test_outcast_empty_list() {
        let network = create_network();
        let outcast = Outcast::new(&network);

        assert!(matches!(outcast.outcast(&[]), Err(Error::EmptySubset)));
    }

    #[test]
    fn test_outcast_unknown_term() {
        let network = create_network();
        let outcast = Outcast::new(&network);

        let result = outcast.outcast(&["dog", "unicorn"]);
        assert!(matches!(result, Err(Error::UnknownTerm(_))));
    }

    #[test]
    fn test_outcast_synonyms_of_one_concept() {
        let network = create_network();
        let outcast = Outcast::new(&network);

        // pebble and stone share a concept at distance zero; dog is the outlier
        assert_eq!(
            outcast.outcast(&["pebble", "stone", "dog"]).unwrap(),
            "dog"
        );
    }
}
