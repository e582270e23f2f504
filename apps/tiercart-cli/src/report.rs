//! Report rendering.
//!
//! ## Text Format
//! ```text
//! Total Amount: 32
//! Cheap Category Discount: 3
//! A (1 items)
//! B (1 items)
//! ```
//!
//! Categories with a zero bucket are left out. Items appear in cart order.

use serde::Serialize;
use std::fmt::Write as _;
use tiercart_core::{Money, PriceSummary};

use crate::config::OutputFormat;
use crate::error::CliResult;

#[derive(Debug, Serialize)]
struct CategoryLine {
    category: &'static str,
    discount: Money,
}

#[derive(Debug, Serialize)]
struct ItemLine<'a> {
    name: &'a str,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    total: Money,
    category_discounts: Vec<CategoryLine>,
    items: Vec<ItemLine<'a>>,
}

/// Renders the report in `format`, newline-terminated.
pub fn render(format: OutputFormat, summary: &PriceSummary, counts: &[(String, u32)]) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary, counts)),
        OutputFormat::Json => render_json(summary, counts),
    }
}

pub fn render_text(summary: &PriceSummary, counts: &[(String, u32)]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Total Amount: {}", summary.total);
    for (category, discount) in summary.category_discounts.nonzero() {
        let _ = writeln!(out, "{} Category Discount: {}", category.label(), discount);
    }
    for (name, quantity) in counts {
        let _ = writeln!(out, "{name} ({quantity} items)");
    }

    out
}

pub fn render_json(summary: &PriceSummary, counts: &[(String, u32)]) -> CliResult<String> {
    let document = ReportDocument {
        total: summary.total,
        category_discounts: summary
            .category_discounts
            .nonzero()
            .map(|(category, discount)| CategoryLine {
                category: category.label(),
                discount,
            })
            .collect(),
        items: counts
            .iter()
            .map(|(name, quantity)| ItemLine {
                name,
                quantity: *quantity,
            })
            .collect(),
    };

    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}
