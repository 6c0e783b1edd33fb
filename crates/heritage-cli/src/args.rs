// crates/heritage-cli/src/args.rs
use clap::{Parser, Subcommand};
use heritage_core::config::SITES_DIR_ENV;
use std::path::PathBuf;

/// CLI arguments for heritage-cli
#[derive(Debug, Parser)]
#[command(
    name = "heritage-cli",
    version,
    about = "CLI for browsing and inspecting a directory of heritage site records"
)]
pub struct CliArgs {
    /// Directory holding one JSON record per site (default: ./sites)
    #[arg(short = 'd', long = "sites-dir", env = SITES_DIR_ENV, global = true)]
    pub sites_dir: Option<PathBuf>,

    /// Read a snapshot written by `export`; takes precedence over the record directory
    #[arg(short = 's', long = "snapshot", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Log loader activity at debug level
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show dataset metadata and aggregate counts
    Stats,

    /// List sites, optionally filtered
    Sites {
        /// Text to look for in names, taglines, descriptions, tags and categories
        #[arg(short, long)]
        query: Option<String>,

        /// County or region, as a label or slug (e.g. "Co. Kerry", munster)
        #[arg(short, long)]
        region: Option<String>,

        /// Tag, as a label or slug
        #[arg(short, long)]
        tag: Option<String>,

        /// Audience, as a label or slug
        #[arg(short, long)]
        audience: Option<String>,
    },

    /// Show the full record of one site
    Site {
        /// Record id (e.g. newgrange)
        id: String,
    },

    /// Show the highest ranked site
    Featured,

    /// List the highest ranked sites
    Preview {
        #[arg(short, long, default_value_t = 6)]
        limit: usize,
    },

    /// Count sites per category
    Categories,

    /// List tags by usage
    Tags {
        /// Only show the N most used tags
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List audiences by usage
    Audiences {
        /// Only show the N most common audiences
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List every county and region
    Regions,

    /// List the sites carrying a tag
    Tag {
        /// Tag slug (e.g. passage-tomb)
        slug: String,
    },

    /// List the sites suited to an audience
    Audience {
        /// Audience slug (e.g. families)
        slug: String,
    },

    /// Show opening status, closures and busy periods
    Seasonal,

    /// Print a sitemap.xml for a site built on this dataset
    Sitemap {
        /// Public base URL (e.g. https://heritage.example)
        #[arg(short, long)]
        base_url: String,
    },

    /// Write the loaded dataset to a JSON snapshot (gzip when PATH ends in .gz)
    Export {
        path: PathBuf,
    },
}
