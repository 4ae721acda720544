//! Cost model of the edit operations and its validation.

use crate::error::SearchError;

/// Costs of the elementary edit operations and the threshold an occurrence must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
    /// Highest cost at which a text position is still reported as an occurrence.
    pub threshold: isize,
    /// Cost of aligning two equal symbols.
    pub match_cost: isize,
    /// Cost of aligning two different symbols.
    pub mismatch_cost: isize,
    /// Cost of aligning a symbol against a gap.
    /// * Must be strictly positive, the cutoff window grows by `(threshold - value) / gap_cost` rows.
    pub gap_cost: isize,
}

impl Default for CostModel {
    /// Unit edit distance allowing one error.
    fn default() -> Self {
        CostModel::unit(1)
    }
}

impl CostModel {
    /// Unit costs (levenshtein distance) with the given threshold.
    ///
    /// ### Example
    /// ```
    /// use rs_sellers::cost::CostModel;
    ///
    /// let costs = CostModel::unit(2);
    /// assert_eq!(costs.cost('A', 'A'), 0);
    /// assert_eq!(costs.cost('A', 'C'), 1);
    /// ```
    pub fn unit(threshold: isize) -> Self {
        CostModel {
            threshold,
            match_cost: 0,
            mismatch_cost: 1,
            gap_cost: 1,
        }
    }

    /// Cost of aligning symbol `a` against symbol `b`.
    pub fn cost(&self, a: char, b: char) -> isize {
        if a == b {
            self.match_cost
        } else {
            self.mismatch_cost
        }
    }

    /// Reject cost models neither computer can run with.
    ///
    /// # Errors
    /// * [`SearchError::InvalidConfiguration`] if `gap_cost <= 0`, `threshold < 0`,
    ///   or `match_cost`/`mismatch_cost` is negative.
    ///   Distances must never decrease along a path, the cutoff relies on it.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.gap_cost <= 0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "gap cost must be > 0, got {}",
                self.gap_cost
            )));
        }
        if self.threshold < 0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "threshold must be >= 0, got {}",
                self.threshold
            )));
        }
        if self.match_cost < 0 || self.mismatch_cost < 0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "match and mismatch costs must be >= 0, got {} and {}",
                self.match_cost, self.mismatch_cost
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cost() {
        let costs = CostModel {
            threshold: 3,
            match_cost: 0,
            mismatch_cost: 2,
            gap_cost: 3,
        };
        assert_eq!(costs.cost('G', 'G'), 0);
        assert_eq!(costs.cost('G', 'T'), 2);
    }

    #[test]
    fn test_default_is_unit() {
        assert_eq!(CostModel::default(), CostModel::unit(1));
        assert!(CostModel::default().validate().is_ok());
    }

    #[test]
    fn test_validate_gap() {
        for gap_cost in [0, -1] {
            let costs = CostModel {
                gap_cost,
                ..Default::default()
            };
            assert!(matches!(
                costs.validate(),
                Err(SearchError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_validate_threshold() {
        assert!(CostModel::unit(0).validate().is_ok());
        assert!(matches!(
            CostModel::unit(-1).validate(),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_substitution_costs() {
        let free_match = CostModel {
            match_cost: 0,
            mismatch_cost: 0,
            ..Default::default()
        };
        assert!(free_match.validate().is_ok());
        for (match_cost, mismatch_cost) in [(-1, 1), (0, -1), (-2, -2)] {
            let costs = CostModel {
                threshold: 4,
                match_cost,
                mismatch_cost,
                gap_cost: 3,
            };
            assert!(matches!(
                costs.validate(),
                Err(SearchError::InvalidConfiguration(_))
            ));
        }
    }
}
