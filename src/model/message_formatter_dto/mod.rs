pub mod message_formatter;
pub mod message_formatter_alarm;
