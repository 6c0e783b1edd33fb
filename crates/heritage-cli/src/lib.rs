//! heritage-cli
//! ============
//!
//! Command-line interface for the `heritage-core` site directory.
//!
//! This crate primarily provides a binary (`heritage-cli`). The library target
//! only exists so docs.rs renders this overview. See the README for full usage.
//!
//! Quick start
//! -----------
//!
//! ```text
//! heritage-cli --help
//! heritage-cli --sites-dir ./sites stats
//! heritage-cli sites --region kerry --tag coastal
//! heritage-cli site newgrange
//! heritage-cli sitemap --base-url https://heritage.example > sitemap.xml
//! ```
//!
//! For programmatic access to the records and queries, use the
//! [`heritage-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
