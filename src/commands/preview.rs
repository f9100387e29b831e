//! Preview command runner.

use seed_core::{PersonId, SeedMode};
use seed_generator::RecordGenerator;

/// Generate sample rows without any store access.
///
/// Sales reference the previewed persons by position (ids `1..=count`).
pub fn preview_lines(
    mode: SeedMode,
    seed: Option<u64>,
    count: u64,
) -> anyhow::Result<Vec<String>> {
    let mut generator = RecordGenerator::new(mode, seed);
    let mut lines = Vec::new();

    for _ in 0..count {
        lines.push(serde_json::to_string(&generator.person())?);
    }
    for i in 0..count {
        let buyer = i as PersonId + 1;
        let seller = if mode.is_incremental() {
            buyer
        } else {
            generator.person_id_up_to(count as PersonId)
        };
        lines.push(serde_json::to_string(&generator.sale(buyer, seller))?);
    }

    Ok(lines)
}

/// Print sample rows as JSON lines.
pub fn run_preview(mode: SeedMode, seed: Option<u64>, count: u64) -> anyhow::Result<()> {
    for line in preview_lines(mode, seed, count)? {
        println!("{line}");
    }
    Ok(())
}
