pub mod alarm_dto;
pub mod configs;
pub mod handler_response;
pub mod message_formatter_dto;
pub mod pagerduty_dto;
pub mod slack_dto;
pub mod sns_dto;
