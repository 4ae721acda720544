//! Sentinel-prefixed input sequences.

use std::ops::Index;

use crate::error::SearchError;

/// Sequence prefixed with a sentinel symbol.
///
/// Index `0` holds the sentinel, so symbol `i` of the input sits at index `i`
/// and row/column `0` of the matrices can carry boundary costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    symbols: Vec<char>,
}

impl Sequence {
    /// Prefix `seq` with `sentinel`.
    ///
    /// # Arguments
    /// * `seq`: Input symbols.
    /// * `sentinel`: Symbol absent from `seq`.
    /// * `name`: Reported in errors, `"pattern"` or `"text"`.
    ///
    /// # Errors
    /// * [`SearchError::EncodingConflict`] if `sentinel` occurs in `seq`.
    ///
    /// ### Example
    /// ```
    /// use rs_sellers::seq::Sequence;
    ///
    /// let seq = Sequence::new("ACT", '$', "pattern").unwrap();
    /// assert_eq!(seq.len(), 3);
    /// assert_eq!(seq[0], '$');
    /// assert_eq!(seq[1], 'A');
    /// ```
    pub fn new(seq: &str, sentinel: char, name: &'static str) -> Result<Self, SearchError> {
        if seq.contains(sentinel) {
            return Err(SearchError::EncodingConflict {
                sentinel,
                sequence: name,
            });
        }
        let mut symbols = Vec::with_capacity(seq.len() + 1);
        symbols.push(sentinel);
        symbols.extend(seq.chars());
        Ok(Sequence { symbols })
    }

    /// Number of symbols, sentinel excluded.
    pub fn len(&self) -> usize {
        self.symbols.len() - 1
    }

    /// True if only the sentinel is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All symbols, sentinel included.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Sentinel at index 0.
    pub fn sentinel(&self) -> char {
        self.symbols[0]
    }
}

impl Index<usize> for Sequence {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.symbols[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sentinel_prefix() {
        let seq = Sequence::new("BARBIER", '$', "text").unwrap();
        assert_eq!(seq.len(), 7);
        assert_eq!(seq.sentinel(), '$');
        assert_eq!(seq.symbols().iter().collect::<String>(), "$BARBIER");
    }

    #[test]
    fn test_empty() {
        let seq = Sequence::new("", '#', "pattern").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.symbols(), ['#']);
    }

    #[test]
    fn test_sentinel_conflict() {
        assert_eq!(
            Sequence::new("AB$C", '$', "text"),
            Err(SearchError::EncodingConflict {
                sentinel: '$',
                sequence: "text"
            })
        );
    }
}
