//! Filtering example for heritage-rs
//!
//! Shows free-text search, region/tag/audience filters, slug lookups and the
//! seasonal digest.

use heritage_rs::prelude::*;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    println!("=== Heritage-RS Filtering Example ===\n");

    let dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("crates/heritage-core/tests/fixtures/sites")
    });
    let db = HeritageDb::load_from_dir(&dir);

    // Example 1: Free-text query, accents and case ignored
    println!("--- Example 1: Sites mentioning 'solstice' ---");
    for site in db.filter_sites(&SiteFilter::new().query("SOLSTICE")) {
        println!("- {}", site.name());
    }
    println!();

    // Example 2: Combined filters
    println!("--- Example 2: Family friendly sites in Munster ---");
    let filter = SiteFilter::new().region("Munster").tag("Family Friendly");
    for site in db.filter_sites(&filter) {
        println!("- {} ({})", site.name(), site.location_label());
    }
    println!();

    // Example 3: Regions and slugs
    println!("--- Example 3: Regions ---");
    for region in db.regions() {
        let count = db.filter_sites(&SiteFilter::new().region(region)).len();
        println!("{region} (/{}) - {count} sites", slugify(region));
    }
    println!();

    // Example 4: Tag pages
    println!("--- Example 4: Pages per tag ---");
    for tag in db.all_tags() {
        let names: Vec<&str> = db
            .sites_by_tag_slug(&tag.slug)
            .into_iter()
            .map(Site::name)
            .collect();
        println!("/tags/{}: {}", tag.slug, names.join(", "));
    }
    println!();

    // Example 5: Seasonal digest
    println!("--- Example 5: Seasonal access ---");
    for entry in db.seasonal_access() {
        println!(
            "{}: {} (bookable tours: {})",
            entry.name,
            entry.current_status.unwrap_or("no status"),
            entry.guided_tours
        );
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
