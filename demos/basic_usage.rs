//! Basic usage example for heritage-rs
//!
//! This example demonstrates how to:
//! - Load a directory of site records
//! - Look up a site and read its admission rows
//! - Rank sites for a featured slot and a preview strip
//! - Aggregate tags, audiences and categories
//!
//! Run with an optional record directory (defaults to the test fixtures):
//!
//! ```text
//! cargo run --example basic_usage -- ./sites
//! ```

use heritage_rs::prelude::*;
use std::path::{Path, PathBuf};

fn sites_dir() -> PathBuf {
    std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("crates/heritage-core/tests/fixtures/sites")
    })
}

fn main() -> Result<()> {
    println!("=== Heritage-RS Basic Usage Example ===\n");

    // Load the directory
    let dir = sites_dir();
    println!("Loading records from {}...", dir.display());
    let store = SiteStore::new(&dir);
    let db = store.get();
    let meta = db.metadata();
    println!(
        "✓ {} sites loaded (last updated {})\n",
        meta.total_sites, meta.last_updated
    );

    // Example 1: List every site
    println!("--- Example 1: All sites ---");
    for (i, site) in db.sites().iter().enumerate() {
        println!("{}. {} ({})", i + 1, site.name(), site.location_label());
    }
    println!();

    // Example 2: Look a site up by id
    println!("--- Example 2: Find site by id ---");
    match db.find_site_by_id("newgrange") {
        Some(site) => {
            println!("Found: {}", site.headline());
            println!("Era: {}", site.era().unwrap_or("unknown"));
            for row in site.admission_rows() {
                println!("  {}: {}", row.label, row.value);
            }
        }
        None => println!("newgrange is not in this directory"),
    }
    println!();

    // Example 3: Featured site and preview
    println!("--- Example 3: Ranking ---");
    if let Some(site) = db.featured_site() {
        println!("Featured: {} (score {})", site.name(), site_score(site));
    }
    for site in db.preview_sites(3) {
        println!("- {} (score {})", site.name(), site_score(site));
    }
    println!();

    // Example 4: Aggregations
    println!("--- Example 4: Tags, audiences and categories ---");
    for tag in db.top_tags(5) {
        println!("#{} x{} -> /tags/{}", tag.tag, tag.count, tag.slug);
    }
    for audience in db.all_audiences() {
        println!("{} x{}", format_label(&audience.audience), audience.count);
    }
    for category in db.category_counts() {
        println!("{} x{}", format_label(&category.category), category.count);
    }
    println!();

    // Example 5: The store only reads once
    println!("--- Example 5: Cache usage ---");
    let start = std::time::Instant::now();
    let again = store.get();
    println!(
        "Second get: {:?} (same instance: {})",
        start.elapsed(),
        std::ptr::eq(db, again)
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
