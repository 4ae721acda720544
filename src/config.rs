//! Search configuration: costs, sentinel and algorithm.

use crate::{cost::CostModel, error::SearchError, mode::Algorithm};

/// Symbol prefixed to pattern and text unless configured otherwise.
pub const DEFAULT_SENTINEL: char = '$';

#[derive(Debug, Clone)]
/// Search configuration.
pub struct SearchConfig {
    /// Edit costs and occurrence threshold, [`CostModel`].
    pub costs: CostModel,
    /// Symbol placed at index 0 of both sequences.
    /// * Must occur in neither the pattern nor the text.
    pub sentinel: char,
    /// Distance computation, [`Algorithm`].
    pub algorithm: Algorithm,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            costs: CostModel::default(),
            sentinel: DEFAULT_SENTINEL,
            algorithm: Algorithm::default(),
        }
    }
}

impl SearchConfig {
    /// Configuration with the given costs, default sentinel and algorithm.
    pub fn with_costs(costs: CostModel) -> Self {
        SearchConfig {
            costs,
            ..Default::default()
        }
    }

    /// Same configuration, running `algorithm` instead.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// # Errors
    /// * [`SearchError::InvalidConfiguration`] if the cost model is unusable.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.costs.validate()
    }
}
