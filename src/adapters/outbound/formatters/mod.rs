pub mod json_formatter;
pub mod table_formatter;

pub use json_formatter::JsonFormatter;
pub use table_formatter::TableFormatter;
