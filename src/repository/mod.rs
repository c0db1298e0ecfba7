pub mod pagerduty_repository_impl;
pub mod slack_repository_impl;
