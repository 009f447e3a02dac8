//! Ranking example for geodini-rs
//!
//! Parses a recorded API response and prints it in display order, with the
//! badges a results table would show.

use geodini_rs::{merge_response, Badge, Result, RowView, SearchResponse};

const RECORDED: &str = include_str!("../crates/geodini-core/tests/fixtures/the_other_london.json");

fn main() -> Result<()> {
    println!("=== Geodini Ranking Example ===\n");

    let response = SearchResponse::from_json(RECORDED)?;
    println!(
        "{} results in {:.2}s, ranked: {}",
        response.len(),
        response.elapsed_seconds(),
        response.ranking().is_some()
    );
    if let Some(rephrased) = &response.interpretation().rephrased_query {
        println!("Rephrased as: {rephrased}");
    }
    println!();

    println!("--- Backend order ---");
    for (i, result) in response.results().iter().enumerate() {
        println!("  [{i}] {}", result.title());
    }
    println!();

    println!("--- Display order ---");
    for row in merge_response(&response) {
        let view = RowView::from_row(&row, " > ");
        let badge = match row.badge {
            Badge::None => "  ".to_string(),
            _ => format!("{:>2}", view.badge_label().unwrap_or_default()),
        };
        let map = if row.result.has_geometry() { "map" } else { "-" };
        println!(
            "  {badge} [{}] {:<28} {:<4} {}",
            row.original_index,
            row.result.title(),
            map,
            view.hierarchy
        );
    }
    println!();

    println!("--- Same response without the hint ---");
    let plain = response.clone().without_ranking();
    for row in merge_response(&plain) {
        println!("  [{}] {}", row.original_index, row.result.title());
    }

    Ok(())
}
