//! Choice of distance computer.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which distance computation feeds the backtrace?
pub enum Algorithm {
    /// Sellers' algorithm over the complete `(m+1) x (n+1)` distance matrix.
    /// * Reference result, `O(m*n)` time and space.
    Full,
    #[default]
    /// Sellers' algorithm with Ukkonen's cutoff.
    /// * **Only computes rows of a column that can still end below the threshold.**
    /// * Keeps two rolling columns of distances but still records the whole direction matrix.
    /// * Sub-quadratic when the threshold is small relative to the sequences.
    Cutoff,
}
