use crate::common::*;

use crate::model::pagerduty_dto::incident_request::*;
use crate::model::slack_dto::slack_message::*;

pub trait MessageFormatter {
    fn get_slack_format(&self) -> SlackMessage;
    fn get_pagerduty_format(&self, service_id: &str) -> IncidentRequest;
}
