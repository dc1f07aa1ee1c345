/// Report formatters for terminal and machine-readable output
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonReportFormatter;
pub use text_formatter::TextReportFormatter;
