//! Backtrace from an occurrence to every alignment of minimal cost.

use log::debug;

use crate::{
    align::{Alignment, GAP_SYMBOL},
    cigar::EditOp,
    direction::DirectionMatrix,
    error::SearchError,
    seq::Sequence,
};

/// Partial path on the work stack: current cell and the ops walked so far, last op first.
struct Frame {
    row: usize,
    column: usize,
    ops: Vec<EditOp>,
}

/// Expands direction flags into every alignment of minimal cost.
pub struct Backtracer<'a> {
    directions: &'a DirectionMatrix,
    pattern: &'a Sequence,
    text: &'a Sequence,
}

impl<'a> Backtracer<'a> {
    /// # Arguments
    /// * `directions`: Flags from one of the distance computers.
    /// * `pattern`, `text`: Sentinel-prefixed sequences the flags were computed for.
    pub fn new(directions: &'a DirectionMatrix, pattern: &'a Sequence, text: &'a Sequence) -> Self {
        Backtracer {
            directions,
            pattern,
            text,
        }
    }

    /// All alignments from `(row, column)` back to `(0, 0)`.
    ///
    /// Depth-first over an explicit stack, so stack usage does not depend on
    /// the input length. Diagonal continuations come out before top before left.
    /// A cell with `k` flags branches into `k` paths, the number of results is
    /// the product of the branching factors along all paths and thus exponential
    /// in the number of tied cells.
    ///
    /// Along row 0 the path keeps stepping left until column 0 is reached,
    /// those steps become [`EditOp::Skip`].
    ///
    /// # Errors
    /// * [`SearchError::UndefinedPredecessor`] if the path hits a cell without flags,
    ///   or `(row, column)` is outside the matrix.
    pub fn alignments(&self, row: usize, column: usize) -> Result<Vec<Alignment>, SearchError> {
        let mut alignments = vec![];
        let mut stack = vec![Frame {
            row,
            column,
            ops: vec![],
        }];

        while let Some(Frame { row, column, ops }) = stack.pop() {
            if row == 0 && column == 0 {
                alignments.push(self.build(ops));
                continue;
            }
            let dir = self
                .directions
                .get(row, column)
                .filter(|dir| !dir.is_empty())
                .ok_or(SearchError::UndefinedPredecessor { row, column })?;

            // Pushed in reverse so the diagonal branch is expanded first.
            if dir.left() {
                let op = if row == 0 { EditOp::Skip } else { EditOp::Insert };
                stack.push(Frame {
                    row,
                    column: column - 1,
                    ops: extended(&ops, op),
                });
            }
            if dir.top() {
                stack.push(Frame {
                    row: row - 1,
                    column,
                    ops: extended(&ops, EditOp::Delete),
                });
            }
            if dir.diagonal() {
                let op = if self.pattern[row] == self.text[column] {
                    EditOp::Match
                } else {
                    EditOp::Mismatch
                };
                stack.push(Frame {
                    row: row - 1,
                    column: column - 1,
                    ops: extended(&ops, op),
                });
            }
        }
        debug!(
            "Backtrace from ({row}, {column}) found {} alignment(s)",
            alignments.len()
        );
        Ok(alignments)
    }

    /// Replay reversed `ops` from the origin to spell out both tracks.
    fn build(&self, mut ops: Vec<EditOp>) -> Alignment {
        ops.reverse();
        let mut pattern = String::with_capacity(ops.len());
        let mut text = String::with_capacity(ops.len());
        let (mut i, mut j) = (1, 1);
        for op in &ops {
            match op {
                EditOp::Match | EditOp::Mismatch => {
                    pattern.push(self.pattern[i]);
                    text.push(self.text[j]);
                    i += 1;
                    j += 1;
                }
                EditOp::Delete => {
                    pattern.push(self.pattern[i]);
                    text.push(GAP_SYMBOL);
                    i += 1;
                }
                EditOp::Insert | EditOp::Skip => {
                    pattern.push(GAP_SYMBOL);
                    text.push(self.text[j]);
                    j += 1;
                }
            }
        }
        Alignment { pattern, text, ops }
    }
}

fn extended(ops: &[EditOp], op: EditOp) -> Vec<EditOp> {
    let mut ops = ops.to_vec();
    ops.push(op);
    ops
}

/// Every alignment of minimal cost ending in cell `(start_row, start_column)`.
/// See [`Backtracer::alignments`].
pub fn backtrace(
    directions: &DirectionMatrix,
    pattern: &Sequence,
    text: &Sequence,
    start_row: usize,
    start_column: usize,
) -> Result<Vec<Alignment>, SearchError> {
    Backtracer::new(directions, pattern, text).alignments(start_row, start_column)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        config::SearchConfig, cost::CostModel, cutoff::compute_cutoff_distance,
        full::compute_full_distance,
    };

    fn tracks(alignments: &[Alignment]) -> Vec<(&str, &str)> {
        alignments
            .iter()
            .map(|a| (a.pattern.as_str(), a.text.as_str()))
            .collect()
    }

    #[test]
    fn test_three_way_tie() {
        let cutoff = compute_cutoff_distance(&SearchConfig::default(), "A", "AB").unwrap();
        let alignments =
            backtrace(&cutoff.directions, &cutoff.pattern, &cutoff.text, 1, 2).unwrap();

        assert_eq!(
            tracks(&alignments),
            [("-A", "AB"), ("--A", "AB-"), ("A-", "AB")]
        );
        assert_eq!(
            alignments[1].ops,
            [EditOp::Skip, EditOp::Skip, EditOp::Delete]
        );
        assert!(alignments
            .iter()
            .all(|a| a.cost(&CostModel::default()) == 1));
    }

    #[test]
    fn test_barbier() {
        let full = compute_full_distance(&SearchConfig::default(), "ABI", "BARBIER").unwrap();
        let alignments = backtrace(&full.directions, &full.pattern, &full.text, 3, 5).unwrap();

        assert_eq!(
            tracks(&alignments),
            [("--ABI", "BARBI"), ("---ABI", "BAR-BI"), ("-A-BI", "BARBI")]
        );
        for alignment in &alignments {
            assert_eq!(alignment.pattern_residues(), "ABI");
            assert_eq!(alignment.cost(&CostModel::default()), 1);
            assert_eq!(alignment.text_end(), 5);
        }
    }

    #[test]
    fn test_leading_gaps() {
        // The diagonal step lands in column 0 below row 0.
        let full = compute_full_distance(&SearchConfig::default(), "BA", "A").unwrap();
        assert_eq!(full.distances[(2, 1)], 1);
        let alignments = backtrace(&full.directions, &full.pattern, &full.text, 2, 1).unwrap();
        assert!(tracks(&alignments).contains(&("BA", "-A")));

        let cutoff = compute_cutoff_distance(&SearchConfig::default(), "BA", "A").unwrap();
        let cut_alignments =
            backtrace(&cutoff.directions, &cutoff.pattern, &cutoff.text, 2, 1).unwrap();
        assert_eq!(alignments, cut_alignments);
    }

    #[test]
    fn test_undefined_predecessor() {
        let cutoff = compute_cutoff_distance(&SearchConfig::default(), "AAAA", "CCCC").unwrap();
        assert_eq!(
            backtrace(&cutoff.directions, &cutoff.pattern, &cutoff.text, 4, 4),
            Err(SearchError::UndefinedPredecessor { row: 4, column: 4 })
        );
        assert_eq!(
            backtrace(&cutoff.directions, &cutoff.pattern, &cutoff.text, 9, 9),
            Err(SearchError::UndefinedPredecessor { row: 9, column: 9 })
        );
    }

    #[test]
    fn test_origin() {
        let full = compute_full_distance(&SearchConfig::default(), "A", "A").unwrap();
        let alignments = backtrace(&full.directions, &full.pattern, &full.text, 0, 0).unwrap();
        assert_eq!(tracks(&alignments), [("", "")]);
    }
}
