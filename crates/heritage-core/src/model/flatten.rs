// crates/heritage-core/src/model/flatten.rs

//! Flattening of free-form trees into display rows.
//!
//! A nested admission price table such as
//! `{"adult": {"peak": 12, "offPeak": 10}, "child": 6}` becomes
//!
//! | label                | value  |
//! |----------------------|--------|
//! | `Adult · Peak`       | €12.00 |
//! | `Adult · Off Peak`   | €10.00 |
//! | `Child`              | €6.00  |

use super::site::Site;
use super::value::{FreeMap, FreeValue};
use crate::text::format_label;
use serde::Serialize;

/// Joins the labels of nested keys.
pub const PATH_SEPARATOR: &str = " · ";

/// How leaf values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlattenStyle {
    /// Numbers are euro amounts, booleans mean "available".
    Price,
    /// Numbers as written, booleans as yes/no.
    Plain,
}

/// One `(path label, formatted value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub label: String,
    pub value: String,
}

/// Walk `map` depth-first and emit one row per leaf.
pub fn flatten(map: &FreeMap, style: FlattenStyle) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    walk(map, None, style, &mut rows);
    rows
}

fn walk(map: &FreeMap, prefix: Option<&str>, style: FlattenStyle, rows: &mut Vec<FlatRow>) {
    for (key, value) in map.iter() {
        let label = match prefix {
            Some(p) => format!("{p}{PATH_SEPARATOR}{}", format_label(key)),
            None => format_label(key),
        };
        match value {
            FreeValue::Tree(inner) => walk(inner, Some(&label), style, rows),
            FreeValue::List(items) => rows.push(FlatRow {
                label,
                value: items
                    .iter()
                    .map(format_list_item)
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
            leaf => rows.push(FlatRow {
                label,
                value: format_leaf(leaf, style),
            }),
        }
    }
}

fn format_leaf(value: &FreeValue, style: FlattenStyle) -> String {
    match (value, style) {
        (FreeValue::Number(n), FlattenStyle::Price) => format!("€{n:.2}"),
        (FreeValue::Number(n), FlattenStyle::Plain) => format_number(*n),
        (FreeValue::Bool(true), FlattenStyle::Price) => "Available".to_owned(),
        (FreeValue::Bool(false), FlattenStyle::Price) => "Not available".to_owned(),
        (FreeValue::Bool(true), FlattenStyle::Plain) => "Yes".to_owned(),
        (FreeValue::Bool(false), FlattenStyle::Plain) => "No".to_owned(),
        (FreeValue::Text(s), _) => s.clone(),
        (other, _) => format_list_item(other),
    }
}

/// Items inside a list are rendered the same way whatever the style.
///
/// A resource object (`{"name": .., "type": .., "url": ..}`) becomes
/// `"<name> · <url>"`.
fn format_list_item(value: &FreeValue) -> String {
    match value {
        FreeValue::Text(s) => s.clone(),
        FreeValue::Number(n) => format_number(*n),
        FreeValue::Bool(b) => b.to_string(),
        FreeValue::List(items) => items
            .iter()
            .map(format_list_item)
            .collect::<Vec<_>>()
            .join(", "),
        FreeValue::Tree(map) => {
            let title = map
                .get_str("name")
                .or_else(|| map.get_str("type"))
                .unwrap_or("Resource");
            match map.get_str("url") {
                Some(url) => format!("{title}{PATH_SEPARATOR}{url}"),
                None => title.to_owned(),
            }
        }
    }
}

/// Integers print without a fractional part, everything else as-is.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl Site {
    /// Admission prices flattened into display rows (empty when absent).
    pub fn admission_rows(&self) -> Vec<FlatRow> {
        self.visiting_information
            .as_ref()
            .and_then(|v| v.admission_prices.as_ref())
            .map(|prices| flatten(prices, FlattenStyle::Price))
            .unwrap_or_default()
    }

    /// Resource links flattened into display rows (empty when absent).
    pub fn resource_rows(&self) -> Vec<FlatRow> {
        self.resources
            .as_ref()
            .map(|r| flatten(r, FlattenStyle::Plain))
            .unwrap_or_default()
    }
}
