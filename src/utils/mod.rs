/// Utility modules for common functionality
pub mod datetime;
pub mod html;
pub mod message_formatter;
