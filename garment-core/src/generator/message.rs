//! Pre-filled customer message and messaging-app deep link.

use super::summary::unit_noun;
use super::writer::format_money;
use crate::config::ShopConfig;
use crate::session::Quote;
use std::fmt::Write;

/// Build the message a customer sends to the shop.
pub fn build_message(quote: &Quote, shop: &ShopConfig) -> String {
    let meta = quote.order.metadata();
    let mut msg = String::new();

    writeln!(msg, "Hello, I am a customer interested in custom garments.").unwrap();
    writeln!(msg).unwrap();
    writeln!(msg, "Model: {}", meta.model_name).unwrap();
    writeln!(msg, "Set type: {}", meta.set_type).unwrap();
    writeln!(msg, "Sizes: {}", quote.order.sizes()).unwrap();
    if let Some(fabric) = &meta.fabric {
        writeln!(msg, "Fabric: {}", fabric).unwrap();
    }
    writeln!(msg, "Main color: {}", meta.color).unwrap();
    if let Some(date) = meta.delivery_date {
        writeln!(msg, "Delivery date: {}", date).unwrap();
    }
    writeln!(msg, "Comments: {}", meta.comments.trim()).unwrap();
    writeln!(
        msg,
        "Estimated price per {}: {}",
        unit_noun(meta.set_type),
        format_money(&shop.currency, quote.breakdown.suggested_unit_price)
    )
    .unwrap();
    write!(msg, "I already generated my quote summary from the app.").unwrap();

    msg
}

/// Deep link that opens the messaging app with the message pre-filled.
pub fn build_message_link(quote: &Quote, shop: &ShopConfig) -> String {
    let message = build_message(quote, shop);
    format!(
        "{}/{}?text={}",
        shop.messaging_base_url.trim_end_matches('/'),
        shop.messaging_number,
        urlencoding::encode(&message)
    )
}
