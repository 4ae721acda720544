//! Occurrence search with minimal cost alignments.

use log::debug;

use crate::{
    align::Alignment,
    backtrace::Backtracer,
    config::SearchConfig,
    cutoff::compute_cutoff_distance,
    error::SearchError,
    full::compute_full_distance,
    mode::Algorithm,
};

/// Text position where the whole pattern matched within the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccurrenceReport {
    /// One-based text column the occurrence ends in.
    pub column: usize,
    /// Distance in the last pattern row of that column.
    pub cost: isize,
}

/// Occurrence of minimal cost together with every alignment explaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedOccurrence {
    /// Where and at which cost the pattern occurs.
    pub report: OccurrenceReport,
    /// All alignments of cost `report.cost` ending in `report.column`.
    pub alignments: Vec<Alignment>,
}

/// Reports whose cost equals the lowest reported cost, in column order.
pub fn minimal_reports(occurrences: &[OccurrenceReport]) -> Vec<OccurrenceReport> {
    let Some(min_cost) = occurrences.iter().map(|report| report.cost).min() else {
        return vec![];
    };
    occurrences
        .iter()
        .filter(|report| report.cost == min_cost)
        .copied()
        .collect()
}

/// Search `pattern` in `text` and explain every occurrence of minimal cost.
///
/// * @param `config`: [`SearchConfig`] configuration, `config.algorithm` picks the distance computation.
/// * @param `pattern`: Short sequence to look for.
/// * @param `text`: Sequence searched.
///
/// ### Example
/// ```
/// use rs_sellers::{config::SearchConfig, search::find_minimal_cost_alignments};
///
/// let found = find_minimal_cost_alignments(&SearchConfig::default(), "ABI", "BARBIER").unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].report.column, 5);
/// assert_eq!(found[0].alignments.len(), 3);
/// ```
///
/// # Errors
/// * [`SearchError::InvalidConfiguration`] or [`SearchError::EncodingConflict`] for bad input.
/// * [`SearchError::UndefinedPredecessor`] if an occurrence cannot be traced back.
pub fn find_minimal_cost_alignments(
    config: &SearchConfig,
    pattern: &str,
    text: &str,
) -> Result<Vec<AlignedOccurrence>, SearchError> {
    let (pattern, text, directions, occurrences) = match config.algorithm {
        Algorithm::Full => {
            let full = compute_full_distance(config, pattern, text)?;
            (full.pattern, full.text, full.directions, full.occurrences)
        }
        Algorithm::Cutoff => {
            let cutoff = compute_cutoff_distance(config, pattern, text)?;
            (cutoff.pattern, cutoff.text, cutoff.directions, cutoff.occurrences)
        }
    };

    let minimal = minimal_reports(&occurrences);
    if let Some(report) = minimal.first() {
        debug!(
            "{} of {} occurrence(s) share the minimal cost {}",
            minimal.len(),
            occurrences.len(),
            report.cost
        );
    }

    let backtracer = Backtracer::new(&directions, &pattern, &text);
    minimal
        .into_iter()
        .map(|report| {
            Ok(AlignedOccurrence {
                report,
                alignments: backtracer.alignments(pattern.len(), report.column)?,
            })
        })
        .collect()
}
