//! # Print Report
//!
//! Plain-text rendering of a [`ShutteringResult`] for terminals and
//! printers: a header, the material summary, then one table per category.

use std::fmt::Write;

use crate::calculations::{CategoryResult, ShutteringResult};
use crate::materials::MaterialFamily;

const RULE_WIDTH: usize = 72;

/// Render the full printable report.
pub fn render_text_report(result: &ShutteringResult) -> String {
    let mut out = String::new();
    let heavy = "═".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "  SHUTTERING MATERIAL ESTIMATE");
    let _ = writeln!(out, "  Total area: {} sq ft", group_thousands(result.total_area));
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out);

    out.push_str(&render_summary(result));

    for category in &result.categories {
        let _ = writeln!(out);
        out.push_str(&render_category(category));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heavy);
    out
}

/// Render only the cross-category summary block.
pub fn render_summary(result: &ShutteringResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Material Summary");
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH));
    for family in MaterialFamily::ALL {
        let _ = writeln!(
            out,
            "  {:<20} {:>12} pcs",
            family.label(),
            group_thousands(result.summary.total(family))
        );
    }
    out
}

/// Render one category table.
pub fn render_category(category: &CategoryResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} sq ft)",
        category.category.display_name(),
        group_thousands(category.total_area)
    );
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH));
    let _ = writeln!(out, "  {}", category.notes);
    for remark in &category.remarks {
        let _ = writeln!(out, "  * {}", remark);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  {:<34} {:<24} {:>10}  {}", "Material", "Size", "Qty", "Unit");
    for item in &category.materials {
        let _ = writeln!(
            out,
            "  {:<34} {:<24} {:>10}  {}",
            item.name,
            item.size.as_deref().unwrap_or("-"),
            group_thousands(item.quantity),
            item.unit
        );
    }
    out
}

/// Format an integer with comma thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
