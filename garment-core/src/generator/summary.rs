//! Printable quote summary.

use super::writer::{format_money, DocumentWriter};
use crate::config::ShopConfig;
use crate::model::{CostTerm, SetType};
use crate::session::Quote;

/// Render the printable summary of a quote.
pub fn render_summary(quote: &Quote, shop: &ShopConfig) -> String {
    let mut w = DocumentWriter::new();
    let meta = quote.order.metadata();
    let b = &quote.breakdown;
    let money = |amount: f64| format_money(&shop.currency, amount);

    w.write_title(&format!("QUOTE - SPORTSWEAR SETS - {}", shop.name));
    w.write_field("Date", quote.created_at.format("%Y-%m-%d"));
    w.write_field("Model", &meta.model_name);
    w.write_field("Set type", meta.set_type);
    w.write_field("Sizes", quote.order.sizes());
    if let Some(fabric) = &meta.fabric {
        w.write_field("Fabric", fabric);
    }
    w.write_field("Color", &meta.color);
    if let Some(date) = meta.delivery_date {
        w.write_field("Delivery date", date);
    }
    if !meta.comments.trim().is_empty() {
        w.write_field("Comments", meta.comments.trim());
    }
    if let Some(logo) = quote.order.logo() {
        w.write_field("Logo", &logo.file_name);
    }
    let embroidery = quote.order.embroidery();
    if embroidery.any() {
        let parts: Vec<&str> = [(embroidery.logo, "logo"), (embroidery.name, "name")]
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, what)| *what)
            .collect();
        w.write_field("Embroidery", parts.join(", "));
    }

    w.write_blank();
    w.write_heading("Cost breakdown");
    for item in b.line_items() {
        let label = match item.term {
            CostTerm::Fabric => format!("{} ({:.2} m)", item.term.label(), b.fabric_meters),
            CostTerm::Lining => format!("{} ({:.2} m)", item.term.label(), b.lining_meters),
            CostTerm::Pattern => format!("{} ({} sizes)", item.term.label(), b.distinct_sizes_used),
            _ => item.term.label().to_string(),
        };
        w.write_amount(&label, &money(item.amount));
    }
    w.write_rule('-');
    w.write_amount(
        &format!("Estimated total cost ({} garments)", b.total_units),
        &money(b.total_cost),
    );
    w.write_amount("Margin", &money(b.margin_total));
    w.write_amount(
        &format!("Suggested price per {}", unit_noun(meta.set_type)),
        &money(b.suggested_unit_price),
    );

    w.take_output()
}

/// What one priced unit is called on documents.
pub fn unit_noun(set_type: SetType) -> &'static str {
    match set_type {
        SetType::FullSet => "set",
        SetType::JacketOnly => "jacket",
    }
}
