use log::{info, LevelFilter};

use rs_sellers::{
    config::SearchConfig,
    cutoff::compute_cutoff_distance,
    full::compute_full_distance,
    render::{render_alignments, render_directions, render_distances, render_occurrences},
    search::find_minimal_cost_alignments,
};

const DEMOS: [(&str, &str); 2] = [("ABI", "BARBIER"), ("AABB", "BABAABABB")];

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = SearchConfig::default();
    for (pattern, text) in DEMOS {
        info!("Searching {pattern:?} in {text:?} with {:?}", config.costs);

        let full = compute_full_distance(&config, pattern, text)?;
        info!(
            "Distance matrix:\n{}",
            render_distances(&full.distances, &full.pattern, &full.text)
        );
        info!("Occurrences:\n{}", render_occurrences(&full.occurrences));

        let cutoff = compute_cutoff_distance(&config, pattern, text)?;
        info!(
            "Cutoff directions:\n{}",
            render_directions(&cutoff.directions, &cutoff.pattern, &cutoff.text)
        );
        info!("Cutoff occurrences:\n{}", render_occurrences(&cutoff.occurrences));

        let found = find_minimal_cost_alignments(&config, pattern, text)?;
        for occurrence in found {
            info!(
                "Alignments with minimal costs of {} ending in column {}:\n{}",
                occurrence.report.cost,
                occurrence.report.column,
                render_alignments(&occurrence.alignments)
            );
        }
    }
    Ok(())
}
