//! Gapped alignments recovered from the direction flags.

use crate::{
    cigar::{to_cigar, CigarFormat, EditOp},
    cost::CostModel,
};

/// Symbol shown where one sequence has no counterpart.
pub const GAP_SYMBOL: char = '-';

/// One optimal way to explain an occurrence.
///
/// Both tracks have the same length as `ops`. The alignment starts at the
/// beginning of the text: leading text before the occurrence is kept as
/// [`EditOp::Skip`] columns and costs nothing.
///
/// Inputs may themselves contain [`GAP_SYMBOL`], so a `'-'` in a track is not
/// necessarily a gap. `ops` is authoritative: use [`Alignment::pattern_residues`]
/// rather than stripping `'-'` from `pattern`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alignment {
    /// Pattern symbols with [`GAP_SYMBOL`] where the text has extra symbols.
    pub pattern: String,
    /// Text symbols with [`GAP_SYMBOL`] where the pattern has extra symbols.
    pub text: String,
    /// Edit operation of every column.
    pub ops: Vec<EditOp>,
}

impl Alignment {
    /// Cost of the alignment under `costs`.
    /// * Equals the distance of the cell the alignment was traced from.
    pub fn cost(&self, costs: &CostModel) -> isize {
        let mut pattern = self.pattern.chars();
        let mut text = self.text.chars();
        let mut cost = 0;
        for op in &self.ops {
            let (p, t) = (pattern.next(), text.next());
            let step = match (op, p, t) {
                (EditOp::Match | EditOp::Mismatch, Some(p), Some(t)) => costs.cost(p, t),
                (EditOp::Insert | EditOp::Delete, _, _) => costs.gap_cost,
                _ => 0,
            };
            cost = step.saturating_add(cost);
        }
        cost
    }

    /// Pattern symbols consumed by the alignment, in order.
    pub fn pattern_residues(&self) -> String {
        self.pattern
            .chars()
            .zip(&self.ops)
            .filter(|(_, op)| matches!(op, EditOp::Match | EditOp::Mismatch | EditOp::Delete))
            .map(|(symbol, _)| symbol)
            .collect()
    }

    /// Zero-based position in the text where the occurrence starts.
    pub fn text_start(&self) -> usize {
        self.ops.iter().take_while(|op| **op == EditOp::Skip).count()
    }

    /// Zero-based exclusive position in the text where the occurrence ends.
    pub fn text_end(&self) -> usize {
        self.ops.iter().filter(|op| **op != EditOp::Delete).count()
    }

    /// CIGAR of the matched span, see [`to_cigar`].
    pub fn cigar(&self, format: CigarFormat) -> String {
        to_cigar(&self.ops, format)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn barbier_insert() -> Alignment {
        // -A-BI
        // BARBI
        Alignment {
            pattern: "-A-BI".to_owned(),
            text: "BARBI".to_owned(),
            ops: vec![
                EditOp::Skip,
                EditOp::Match,
                EditOp::Insert,
                EditOp::Match,
                EditOp::Match,
            ],
        }
    }

    #[test]
    fn test_cost() {
        let alignment = barbier_insert();
        assert_eq!(alignment.cost(&CostModel::unit(1)), 1);
        let costs = CostModel {
            threshold: 5,
            match_cost: 1,
            mismatch_cost: 3,
            gap_cost: 2,
        };
        assert_eq!(alignment.cost(&costs), 5);
    }

    #[test]
    fn test_span() {
        let alignment = barbier_insert();
        assert_eq!(alignment.text_start(), 1);
        assert_eq!(alignment.text_end(), 5);
        assert_eq!(alignment.pattern_residues(), "ABI");
        assert_eq!(alignment.cigar(CigarFormat::Extended), "1=1I2=");
    }
}
