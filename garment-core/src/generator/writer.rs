//! Plain-text document writer.

use std::fmt::Write;

/// Default page width in characters.
pub const DEFAULT_WIDTH: usize = 56;

/// Column width for field labels.
pub const LABEL_WIDTH: usize = 16;

/// Column width for right-aligned amounts.
pub const AMOUNT_WIDTH: usize = 16;

/// Line-oriented writer for fixed-width documents.
pub struct DocumentWriter {
    /// Page width.
    width: usize,
    /// Output buffer.
    buffer: String,
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter {
    /// Create a writer with the default width.
    pub fn new() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }

    /// Create a writer for a specific page width.
    pub fn with_width(width: usize) -> Self {
        Self {
            width: width.max(LABEL_WIDTH + AMOUNT_WIDTH),
            buffer: String::new(),
        }
    }

    /// Get the document so far.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the finished document.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write a line as-is.
    pub fn write_raw(&mut self, content: &str) {
        writeln!(self.buffer, "{}", content).unwrap();
    }

    /// Write an empty line.
    pub fn write_blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Write a full-width rule.
    pub fn write_rule(&mut self, ch: char) {
        let rule: String = std::iter::repeat(ch).take(self.width).collect();
        self.write_raw(&rule);
    }

    /// Write the document title underlined with `=`.
    pub fn write_title(&mut self, title: &str) {
        self.write_raw(title);
        self.write_rule('=');
    }

    /// Write an upper-case section heading underlined with `-`.
    pub fn write_heading(&mut self, heading: &str) {
        self.write_raw(&heading.to_uppercase());
        self.write_rule('-');
    }

    /// Write a `Label:  value` line.
    pub fn write_field(&mut self, label: &str, value: impl std::fmt::Display) {
        let label = format!("{}:", label);
        writeln!(self.buffer, "{:<w$}{}", label, value, w = LABEL_WIDTH).unwrap();
    }

    /// Write a label with a right-aligned amount.
    pub fn write_amount(&mut self, label: &str, amount: &str) {
        writeln!(
            self.buffer,
            "{:<lw$}{:>aw$}",
            label,
            amount,
            lw = self.width - AMOUNT_WIDTH,
            aw = AMOUNT_WIDTH
        )
        .unwrap();
    }
}

/// Format an amount with two decimals behind the currency prefix.
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{} {:.2}", currency, amount)
}
