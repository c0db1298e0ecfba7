pub mod channel_type;
pub mod urgency_level;
