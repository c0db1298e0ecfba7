pub mod pagerduty_notify_service;
pub mod slack_notify_service;
