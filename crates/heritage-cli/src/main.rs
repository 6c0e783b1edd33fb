//! heritage-cli: command-line interface for heritage-core
//!
//! Browses a directory of heritage site records from the terminal: dataset
//! statistics, filtered listings, single-record detail, ranking, tag and
//! audience aggregation, the seasonal digest and sitemap generation.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ heritage-cli stats
//!
//! - List sites in Kerry tagged "Coastal"
//!   $ heritage-cli sites --region kerry --tag coastal
//!
//! - Show one record
//!   $ heritage-cli site newgrange
//!
//! - Print a sitemap
//!   $ heritage-cli sitemap --base-url https://heritage.example
//!
//! Data source
//! -----------
//!
//! Records are read from `--sites-dir`, else `$HERITAGE_SITES_DIR`, else
//! `./sites`. `--snapshot <file>` reads a file written by `heritage-cli export`
//! instead. Set `RUST_LOG` or pass `--verbose` to see what the loader skips.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use heritage_core::config::resolve_sites_dir;
use heritage_core::prelude::*;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Logs go to stderr so listings and XML stay pipeable.
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("heritage_core={log_level},heritage_cli={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = SiteStore::new(resolve_sites_dir(args.sites_dir.as_deref()));
    let snapshot;
    let db: &HeritageDb = match &args.snapshot {
        Some(path) => {
            snapshot = HeritageDb::load_export(path)
                .with_context(|| format!("failed to read snapshot {}", path.display()))?;
            &snapshot
        }
        None => {
            debug!(dir = %store.dir().display(), "using record directory");
            store.get()
        }
    };

    match args.command {
        Commands::Stats => {
            let meta = db.metadata();
            let insights = db.dataset_insights();
            println!("Dataset statistics:");
            println!("  Sites: {}", meta.total_sites);
            println!("  Last updated: {}", meta.last_updated);
            println!("  Schema: {}", meta.schema_version);
            println!("  Source: {}", meta.data_source);
            println!("  Counties: {}", insights.unique_counties);
            println!("  Eras: {}", insights.eras_represented);
            println!("  Managing bodies: {}", insights.managing_bodies);
            println!("  Experience types: {}", insights.experience_types);
            println!("  Audience segments: {}", insights.audience_segments);
        }

        Commands::Sites {
            query,
            region,
            tag,
            audience,
        } => {
            let filter = SiteFilter {
                query,
                region,
                tag,
                audience,
            };
            let matches = db.filter_sites(&filter);
            if matches.is_empty() {
                println!("No sites found");
            } else {
                for site in matches {
                    println!("{}", render::site_line(site));
                }
            }
        }

        Commands::Site { id } => match db.find_site_by_id(&id) {
            Some(site) => println!("{}", render::site_detail(site)),
            None => eprintln!("No site found for: {id}"),
        },

        Commands::Featured => match db.featured_site() {
            Some(site) => println!("{}", render::site_detail(site)),
            None => eprintln!("Dataset is empty"),
        },

        Commands::Preview { limit } => {
            for site in db.preview_sites(limit) {
                println!("{}", render::site_line(site));
            }
        }

        Commands::Categories => {
            for c in db.category_counts() {
                println!("{:>4}  {}", c.count, format_label(&c.category));
            }
        }

        Commands::Tags { limit } => {
            for t in db.top_tags(limit.unwrap_or(usize::MAX)) {
                println!("{:>4}  {} ({})", t.count, t.tag, t.slug);
            }
        }

        Commands::Audiences { limit } => {
            for a in db.top_audiences(limit.unwrap_or(usize::MAX)) {
                println!("{:>4}  {} ({})", a.count, format_label(&a.audience), a.slug);
            }
        }

        Commands::Regions => {
            for r in db.regions() {
                println!("{r} ({})", slugify(r));
            }
        }

        Commands::Tag { slug } => match db.find_tag_by_slug(&slug) {
            Some(tag) => {
                println!("Sites tagged {} ({}):", tag.tag, tag.count);
                for site in db.sites_by_tag_slug(&slug) {
                    println!("- {}", render::site_line(site));
                }
            }
            None => eprintln!("No tag found for: {slug}"),
        },

        Commands::Audience { slug } => match db.find_audience_by_slug(&slug) {
            Some(audience) => {
                println!(
                    "Sites for {} ({}):",
                    format_label(&audience.audience),
                    audience.count
                );
                for site in db.sites_by_audience_slug(&slug) {
                    println!("- {}", render::site_line(site));
                }
            }
            None => eprintln!("No audience found for: {slug}"),
        },

        Commands::Seasonal => {
            for entry in db.seasonal_access() {
                println!("{}", render::seasonal_line(&entry));
            }
        }

        Commands::Sitemap { base_url } => {
            print!("{}", render::sitemap_xml(&sitemap_entries(db, &base_url)));
        }

        Commands::Export { path } => {
            db.export_to(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {} sites to {}", db.site_count(), path.display());
        }
    }

    Ok(())
}
