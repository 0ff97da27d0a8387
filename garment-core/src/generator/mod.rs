//! Quote documents: printable summary and messaging link.

mod message;
mod summary;
mod writer;

pub use message::{build_message, build_message_link};
pub use summary::{render_summary, unit_noun};
pub use writer::{format_money, DocumentWriter};
