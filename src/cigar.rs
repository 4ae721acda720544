//! Edit operations and their CIGAR encoding.

/// Describes CIGAR format.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
/// * See http://drive5.com/usearch/manual/cigar.html
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CigarFormat {
    #[default]
    /// Match: 'M', Insertion: 'I', Deletion: 'D', Mismatch: 'M'.
    Standard,
    /// Match: '=', Insertion: 'I', Deletion: 'D', Mismatch: 'X'.
    Extended,
}

/// One column of an alignment, read from the pattern's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Match
    Match,
    /// Insertion to pattern = text symbol against a gap, left step.
    ///
    /// ### Example:
    /// * Text:    `ATCG`
    /// * Pattern: `A-CG`
    Insert,
    /// Deletion from text = pattern symbol against a gap, top step.
    ///
    /// ### Example:
    /// * Text:    `A-CG`
    /// * Pattern: `ATCG`
    Delete,
    /// Mismatch
    Mismatch,
    /// Text before the occurrence starts, left step along row 0. Costs nothing.
    Skip,
}

impl EditOp {
    /// CIGAR symbol, `None` for ops outside the matched span.
    pub fn symbol(self, format: CigarFormat) -> Option<char> {
        match (self, format) {
            (EditOp::Skip, _) => None,
            (EditOp::Insert, _) => Some('I'),
            (EditOp::Delete, _) => Some('D'),
            (EditOp::Match | EditOp::Mismatch, CigarFormat::Standard) => Some('M'),
            (EditOp::Match, CigarFormat::Extended) => Some('='),
            (EditOp::Mismatch, CigarFormat::Extended) => Some('X'),
        }
    }
}

/// Run-length encode `ops` into a CIGAR string. [`EditOp::Skip`] is left out.
///
/// ```
/// use rs_sellers::cigar::{to_cigar, CigarFormat, EditOp};
///
/// let ops = [EditOp::Skip, EditOp::Match, EditOp::Mismatch, EditOp::Insert];
/// assert_eq!(to_cigar(&ops, CigarFormat::Standard), "2M1I");
/// assert_eq!(to_cigar(&ops, CigarFormat::Extended), "1=1X1I");
/// ```
pub fn to_cigar(ops: &[EditOp], format: CigarFormat) -> String {
    let mut cigar = String::new();
    let mut run: Option<(char, usize)> = None;

    for symbol in ops.iter().filter_map(|op| op.symbol(format)) {
        run = match run {
            Some((prev, len)) if prev == symbol => Some((prev, len + 1)),
            Some((prev, len)) => {
                cigar.push_str(&format!("{len}{prev}"));
                Some((symbol, 1))
            }
            None => Some((symbol, 1)),
        };
    }
    if let Some((prev, len)) = run {
        cigar.push_str(&format!("{len}{prev}"));
    }
    cigar
}
