pub mod pagerduty_notify_service_impl;
pub mod slack_notify_service_impl;
