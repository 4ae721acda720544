//! Text rendering of matrices, occurrences and alignments for inspection.
//! Nothing in the algorithms calls into this module.

use std::fmt::{self, Display};

use crate::{
    align::Alignment,
    direction::{Direction, DirectionMatrix},
    full::DistanceMatrix,
    search::OccurrenceReport,
    seq::Sequence,
};

const DIAGONAL_ARROW: char = '\u{2196}';
const UP_ARROW: char = '\u{2191}';
const LEFT_ARROW: char = '\u{2190}';

/// Three characters: diagonal, top and left slot, blank where unset.
impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |set: bool, glyph: char| if set { glyph } else { ' ' };
        write!(
            f,
            "{}{}{}",
            slot(self.diagonal(), DIAGONAL_ARROW),
            slot(self.top(), UP_ARROW),
            slot(self.left(), LEFT_ARROW)
        )
    }
}

/// Pattern track above text track.
impl Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.pattern)?;
        write!(f, "{}", self.text)
    }
}

impl Display for OccurrenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column: {} || Costs: {}", self.column, self.cost)
    }
}

fn header(text: &Sequence, separator: &str, prefix: &str) -> String {
    let symbols: Vec<String> = text.symbols().iter().map(char::to_string).collect();
    format!("{prefix}{}", symbols.join(separator))
}

/// Distance matrix with the text on top and one pattern symbol per row.
///
/// ```text
///        $   A   B
///     ------------
/// $   [  0   0   0 ]
/// A   [  1   0   1 ]
/// ```
pub fn render_distances(distances: &DistanceMatrix, pattern: &Sequence, text: &Sequence) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", header(text, "   ", "       ")));
    out.push_str(&format!("    {}\n", "-".repeat(4 * text.symbols().len())));
    for (i, symbol) in pattern.symbols().iter().enumerate() {
        let cells: Vec<String> = distances
            .row(i)
            .iter()
            .map(|d| format!("{d:3}"))
            .collect();
        out.push_str(&format!("{symbol}   [{} ]\n", cells.join(" ")));
    }
    out
}

/// Direction matrix with arrow glyphs, blank cells were never computed.
pub fn render_directions(
    directions: &DirectionMatrix,
    pattern: &Sequence,
    text: &Sequence,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", header(text, "    ", "       ")));
    out.push_str(&format!("    {}\n", "-".repeat(5 * text.symbols().len())));
    for (i, symbol) in pattern.symbols().iter().enumerate() {
        let cells: Vec<String> = (0..directions.columns())
            .map(|j| directions[(i, j)].to_string())
            .collect();
        out.push_str(&format!("{symbol}   [ {} ]\n", cells.join("  ")));
    }
    out
}

/// One line per occurrence.
pub fn render_occurrences(occurrences: &[OccurrenceReport]) -> String {
    occurrences
        .iter()
        .map(|report| format!("{report}\n"))
        .collect()
}

/// Alignments separated by blank lines.
pub fn render_alignments(alignments: &[Alignment]) -> String {
    alignments
        .iter()
        .map(|alignment| format!("\n{alignment}\n"))
        .collect()
}
