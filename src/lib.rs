//! Workspace facade over [`heritage_core`], so the demos can `use heritage_rs::prelude::*`.
pub use heritage_core::*;
