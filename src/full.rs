//! Sellers' algorithm over the complete distance matrix.

use std::ops::Index;

use log::debug;

use crate::{
    config::SearchConfig,
    direction::{Direction, DirectionMatrix},
    error::SearchError,
    search::OccurrenceReport,
    seq::Sequence,
};

/// Distances `D[i][j]` of a `(m+1) x (n+1)` matrix.
///
/// `D[i][j]` is the minimal cost of aligning the first `i` pattern symbols
/// against a suffix of the text ending at text position `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<isize>,
}

impl DistanceMatrix {
    fn new(m: usize, n: usize) -> Self {
        DistanceMatrix {
            rows: m + 1,
            columns: n + 1,
            cells: vec![0; (m + 1) * (n + 1)],
        }
    }

    /// Number of rows, `m + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `n + 1`.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Distances of pattern row `i` across all text columns.
    pub fn row(&self, i: usize) -> &[isize] {
        &self.cells[i * self.columns..(i + 1) * self.columns]
    }

    fn set(&mut self, i: usize, j: usize, value: isize) {
        let columns = self.columns;
        self.cells[i * columns + j] = value;
    }
}

/// Index into `DistanceMatrix` by (row, column).
impl Index<(usize, usize)> for DistanceMatrix {
    type Output = isize;

    fn index(&self, index: (usize, usize)) -> &isize {
        assert!(
            index.0 < self.rows && index.1 < self.columns,
            "Invalid index {index:?}."
        );
        &self.cells[index.0 * self.columns + index.1]
    }
}

/// Output of [`compute_full_distance`].
#[derive(Debug, Clone)]
pub struct FullDistance {
    /// Sentinel-prefixed pattern.
    pub pattern: Sequence,
    /// Sentinel-prefixed text.
    pub text: Sequence,
    /// Complete distance matrix.
    pub distances: DistanceMatrix,
    /// Predecessor flags of every cell.
    pub directions: DirectionMatrix,
    /// Columns whose last row is within the threshold, ascending.
    pub occurrences: Vec<OccurrenceReport>,
}

/// Sellers' algorithm: fill the whole distance matrix column by column.
///
/// * Column 0 holds `i * gap_cost`, the pattern aligned against nothing.
/// * Row 0 holds `0`, an occurrence may start anywhere in the text.
/// * Every other cell takes the minimum of its diagonal, top and left candidates.
///
/// After each column the last row is compared against the threshold.
/// Distances saturate at `isize::MAX` instead of overflowing.
///
/// # Errors
/// * [`SearchError::InvalidConfiguration`] for an unusable cost model.
/// * [`SearchError::EncodingConflict`] if the sentinel occurs in `pattern` or `text`.
///
/// ### Example
/// ```
/// use rs_sellers::{config::SearchConfig, full::compute_full_distance};
///
/// let full = compute_full_distance(&SearchConfig::default(), "A", "AB").unwrap();
/// assert_eq!(full.distances.row(1), [1, 0, 1]);
/// ```
pub fn compute_full_distance(
    config: &SearchConfig,
    pattern: &str,
    text: &str,
) -> Result<FullDistance, SearchError> {
    config.validate()?;
    let costs = &config.costs;
    let pattern = Sequence::new(pattern, config.sentinel, "pattern")?;
    let text = Sequence::new(text, config.sentinel, "text")?;
    let (m, n) = (pattern.len(), text.len());
    debug!("Filling full distance matrix for m={m}, n={n}");

    let mut distances = DistanceMatrix::new(m, n);
    let mut directions = DirectionMatrix::new(m, n);
    directions.set_free_start();
    directions.set_leading_gaps(m);

    for i in 0..=m {
        distances.set(i, 0, (i as isize).saturating_mul(costs.gap_cost));
    }

    let mut occurrences = vec![];
    for j in 1..=n {
        distances.set(0, j, 0);
        for i in 1..=m {
            let diagonal =
                distances[(i - 1, j - 1)].saturating_add(costs.cost(pattern[i], text[j]));
            let left = distances[(i, j - 1)].saturating_add(costs.gap_cost);
            let top = distances[(i - 1, j)].saturating_add(costs.gap_cost);
            let min = diagonal.min(left).min(top);
            distances.set(i, j, min);
            directions.set(i, j, Direction::from_candidates(diagonal, top, left, min));
        }
        if distances[(m, j)] <= costs.threshold {
            occurrences.push(OccurrenceReport {
                column: j,
                cost: distances[(m, j)],
            });
        }
    }
    debug!("Full matrix reports {} occurrence(s)", occurrences.len());

    Ok(FullDistance {
        pattern,
        text,
        distances,
        directions,
        occurrences,
    })
}
