use crate::common::*;

use crate::model::alarm_dto::alarm_event::*;
use crate::model::message_formatter_dto::message_formatter::*;
use crate::model::pagerduty_dto::incident_request::*;
use crate::model::slack_dto::slack_message::*;

use crate::enums::urgency_level::*;

use crate::utils_modules::time_utils::*;

/* Attachment colors */
const SLACK_COLOR_ALARM: &str = "#ff0000";
const SLACK_COLOR_OK: &str = "#36a64f";

const SLACK_TITLE: &str = "AWS CloudWatch Alarm";
const SLACK_FOOTER: &str = "AWS CloudWatch";

#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct MessageFormatterAlarm {
    pub alarm_event: AlarmEvent,
    pub environment: String,
}

impl MessageFormatter for MessageFormatterAlarm {
    #[doc = "Slack 메시지 형식으로 변환해주는 함수"]
    fn get_slack_format(&self) -> SlackMessage {
        let alarm: &AlarmEvent = self.alarm_event();

        let color: &str = if alarm.is_alarm_state() {
            SLACK_COLOR_ALARM
        } else {
            SLACK_COLOR_OK
        };

        let fields: Vec<SlackField> = vec![
            SlackField::new(
                "Alarm Name".to_string(),
                alarm.alarm_name().to_string(),
                true,
            ),
            SlackField::new(
                "Environment".to_string(),
                self.environment().to_string(),
                true,
            ),
            SlackField::new("Status".to_string(), alarm.status_transition(), true),
            SlackField::new(
                "Description".to_string(),
                alarm.description_text().to_string(),
                false,
            ),
            SlackField::new("Time".to_string(), alarm.state_change_time_iso(), true),
        ];

        let attachment: SlackAttachment = SlackAttachment::new(
            color.to_string(),
            fields,
            SLACK_FOOTER.to_string(),
            get_current_utc_epoch(),
        );

        SlackMessage::new(SLACK_TITLE.to_string(), vec![attachment])
    }

    #[doc = "PagerDuty incident 형식으로 변환해주는 함수"]
    fn get_pagerduty_format(&self, service_id: &str) -> IncidentRequest {
        let alarm: &AlarmEvent = self.alarm_event();

        let details: String = format!(
            "**Alarm Details:**\n- **Name:** {}\n- **Environment:** {}\n- **Status:** {}\n- **Description:** {}\n- **Time:** {}\n\n**AWS CloudWatch Alarm triggered. Please investigate.**",
            alarm.alarm_name(),
            self.environment(),
            alarm.status_transition(),
            alarm.description_text(),
            alarm.state_change_time_iso()
        );

        let incident: Incident = Incident::new(
            "incident".to_string(),
            format!("AWS CloudWatch Alarm: {}", alarm.alarm_name()),
            ServiceReference::new(service_id.to_string(), "service_reference".to_string()),
            UrgencyLevel::from_alarm(alarm.is_alarm_state()),
            IncidentBody::new("incident_body".to_string(), details),
        );

        IncidentRequest::new(incident)
    }
}
