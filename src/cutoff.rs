//! Sellers' algorithm with Ukkonen's cutoff, two columns of distances.

use log::{debug, trace};

use crate::{
    config::SearchConfig,
    direction::{Direction, DirectionMatrix},
    error::SearchError,
    search::OccurrenceReport,
    seq::Sequence,
};

/// Distance of a row that was not computed for a column.
const UNREACHABLE: isize = isize::MAX;

/// Output of [`compute_cutoff_distance`].
#[derive(Debug, Clone)]
pub struct CutoffDistance {
    /// Sentinel-prefixed pattern.
    pub pattern: Sequence,
    /// Sentinel-prefixed text.
    pub text: Sequence,
    /// Columns whose last row is within the threshold, ascending.
    pub occurrences: Vec<OccurrenceReport>,
    /// Predecessor flags. Only cells inside each column's window are set.
    pub directions: DirectionMatrix,
}

/// Distance at row `i` of a rolling column whose rows `0..=filled` belong to it.
/// * Rows past `filled` may still hold values of an older column.
fn at(column: &[isize], filled: usize, i: usize) -> isize {
    if i <= filled {
        column[i]
    } else {
        UNREACHABLE
    }
}

/// Sellers' algorithm with Ukkonen's cutoff.
///
/// Produces the same occurrences as [`compute_full_distance`](crate::full::compute_full_distance)
/// but only keeps two columns of distances. Per column `j` only rows up to the
/// last essential index of column `j-1`, plus one, are computed. Rows past the
/// last essential index are treated as exceeding the threshold.
///
/// After computing `colLength` rows the last essential index is updated from the value `v` at row `colLength`:
/// * `v < threshold`: grow by `(threshold - v) / gap_cost` rows of gap-only steps.
/// * `v == threshold`: stay at `colLength`.
/// * `v > threshold`: ascending scan of rows `0..=colLength`, every row above the threshold
///   moves the index to the row before it. The last assignment wins.
///
/// The column is reported once the index reaches the last pattern row.
///
/// # Errors
/// * [`SearchError::InvalidConfiguration`] for an unusable cost model.
/// * [`SearchError::EncodingConflict`] if the sentinel occurs in `pattern` or `text`.
///
/// ### Example
/// ```
/// use rs_sellers::{config::SearchConfig, cutoff::compute_cutoff_distance, search::OccurrenceReport};
///
/// let cutoff = compute_cutoff_distance(&SearchConfig::default(), "A", "AB").unwrap();
/// assert_eq!(
///     cutoff.occurrences,
///     [OccurrenceReport { column: 1, cost: 0 }, OccurrenceReport { column: 2, cost: 1 }]
/// );
/// ```
pub fn compute_cutoff_distance(
    config: &SearchConfig,
    pattern: &str,
    text: &str,
) -> Result<CutoffDistance, SearchError> {
    config.validate()?;
    let costs = &config.costs;
    let (threshold, gap) = (costs.threshold, costs.gap_cost);
    let pattern = Sequence::new(pattern, config.sentinel, "pattern")?;
    let text = Sequence::new(text, config.sentinel, "text")?;
    let (m, n) = (pattern.len(), text.len());

    let mut directions = DirectionMatrix::new(m, n);
    let mut prev: Vec<isize> = vec![UNREACHABLE; m + 1];
    let mut cur: Vec<isize> = vec![UNREACHABLE; m + 1];

    // Column 0: pattern prefixes against no text.
    let mut last_essential = usize::try_from(threshold / gap)
        .unwrap_or(0)
        .min(m);
    for (i, d) in prev.iter_mut().enumerate().take(last_essential + 1) {
        *d = (i as isize).saturating_mul(gap);
    }
    let mut prev_filled = last_essential;
    directions.set_free_start();
    directions.set_leading_gaps(last_essential);
    debug!("Cutoff search for m={m}, n={n}, initial window {last_essential}");

    let mut occurrences = vec![];
    for j in 1..=n {
        cur[0] = 0;
        let col_length = m.min(last_essential + 1);

        for i in 1..=col_length {
            let diagonal =
                at(&prev, prev_filled, i - 1).saturating_add(costs.cost(pattern[i], text[j]));
            let left = at(&prev, prev_filled, i).saturating_add(gap);
            let top = cur[i - 1].saturating_add(gap);
            let min = diagonal.min(left).min(top);
            cur[i] = min;
            directions.set(i, j, Direction::from_candidates(diagonal, top, left, min));
        }

        let value = cur[col_length];
        let mut filled = col_length;
        if value < threshold {
            // Rows below col_length were not reached by the previous column,
            // the only way down is a gap in the text.
            last_essential = m.min(col_length + ((threshold - value) / gap) as usize);
            for x in col_length + 1..=last_essential {
                cur[x] = cur[x - 1].saturating_add(gap);
                directions.set(x, j, Direction::TOP);
            }
            filled = last_essential;
        } else if value == threshold {
            last_essential = col_length;
        } else {
            // cur[0] is 0 <= threshold, so x >= 1 whenever this fires.
            for x in 0..=col_length {
                if cur[x] > threshold {
                    last_essential = x - 1;
                }
            }
        }
        trace!("column {j}: computed {col_length} row(s), last essential index {last_essential}");

        if last_essential == m {
            occurrences.push(OccurrenceReport {
                column: j,
                cost: cur[m],
            });
        }

        prev_filled = filled;
        std::mem::swap(&mut prev, &mut cur);
    }
    debug!("Cutoff search reports {} occurrence(s)", occurrences.len());

    Ok(CutoffDistance {
        pattern,
        text,
        occurrences,
        directions,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{cost::CostModel, full::compute_full_distance};

    #[test]
    fn test_single_symbol() {
        let cutoff = compute_cutoff_distance(&SearchConfig::default(), "A", "AB").unwrap();
        assert_eq!(
            cutoff.occurrences,
            [
                OccurrenceReport { column: 1, cost: 0 },
                OccurrenceReport { column: 2, cost: 1 }
            ]
        );
        assert_eq!(cutoff.directions[(1, 1)], Direction::DIAGONAL);
        assert_eq!(
            cutoff.directions[(1, 2)],
            Direction::DIAGONAL | Direction::TOP | Direction::LEFT
        );
    }

    #[test]
    fn test_zero_threshold() {
        let config = SearchConfig::with_costs(CostModel::unit(0));
        let cutoff = compute_cutoff_distance(&config, "A", "AB").unwrap();
        assert_eq!(cutoff.occurrences, [OccurrenceReport { column: 1, cost: 0 }]);
    }

    #[test]
    fn test_barbier() {
        let cutoff = compute_cutoff_distance(&SearchConfig::default(), "ABI", "BARBIER").unwrap();
        assert_eq!(cutoff.occurrences, [OccurrenceReport { column: 5, cost: 1 }]);
        // Outside the window of column 0.
        assert!(cutoff.directions[(2, 0)].is_empty());
        assert!(cutoff.directions[(3, 0)].is_empty());
        // Inside the window the flags agree with the full matrix.
        let full = compute_full_distance(&SearchConfig::default(), "ABI", "BARBIER").unwrap();
        assert_eq!(cutoff.directions[(1, 3)], full.directions[(1, 3)]);
        assert_eq!(cutoff.directions[(2, 4)], full.directions[(2, 4)]);
        assert_eq!(cutoff.directions[(3, 5)], full.directions[(3, 5)]);
    }

    #[test]
    fn test_window_never_reaches_last_row() {
        let cutoff = compute_cutoff_distance(&SearchConfig::default(), "AAAA", "CCCC").unwrap();
        assert!(cutoff.occurrences.is_empty());
        for j in 0..=4 {
            assert!(cutoff.directions[(3, j)].is_empty());
            assert!(cutoff.directions[(4, j)].is_empty());
        }
    }

    #[test]
    fn test_large_threshold_matches_everywhere() {
        let config = SearchConfig::with_costs(CostModel::unit(10));
        let cutoff = compute_cutoff_distance(&config, "ACGT", "TTT").unwrap();
        let full = compute_full_distance(&config, "ACGT", "TTT").unwrap();
        assert_eq!(cutoff.occurrences.len(), 3);
        assert_eq!(cutoff.occurrences, full.occurrences);
    }

    #[test]
    fn test_empty_pattern() {
        let cutoff = compute_cutoff_distance(&SearchConfig::default(), "", "AB").unwrap();
        assert_eq!(
            cutoff.occurrences,
            [
                OccurrenceReport { column: 1, cost: 0 },
                OccurrenceReport { column: 2, cost: 0 }
            ]
        );
    }

    #[test]
    fn test_rejects_invalid_costs() {
        let config = SearchConfig::with_costs(CostModel {
            gap_cost: 0,
            ..Default::default()
        });
        assert!(matches!(
            compute_cutoff_distance(&config, "A", "A"),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }
}
