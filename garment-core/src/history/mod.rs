//! Quote history store.

mod store;

pub use store::{
    HistoryHeader, HistoryLog, HistoryReadout, QuoteRecord, HISTORY_FORMAT, HISTORY_VERSION,
};
