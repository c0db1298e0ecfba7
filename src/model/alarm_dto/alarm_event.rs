use crate::common::*;

use crate::model::sns_dto::sns_envelope::*;

use crate::utils_modules::time_utils::*;

/* Shown whenever an alarm carries no description of its own. */
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided";

#[doc = "CloudWatch 알람 상태변경 메시지에서 추출한 필드들"]
#[derive(Debug, Clone, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct AlarmEvent {
    #[serde(rename = "AlarmName", default)]
    pub alarm_name: String,
    #[serde(rename = "AlarmDescription")]
    pub alarm_description: Option<String>,
    #[serde(rename = "OldStateValue", default)]
    pub old_state_value: String,
    #[serde(rename = "NewStateValue", default)]
    pub new_state_value: String,
    #[serde(
        rename = "StateChangeTime",
        deserialize_with = "deserialize_state_change_time"
    )]
    pub state_change_time: DateTime<Utc>,
}

fn deserialize_state_change_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: String = String::deserialize(deserializer)?;
    convert_str_to_datetime_utc(&raw).map_err(serde::de::Error::custom)
}

impl AlarmEvent {
    #[doc = "Envelope 의 첫번째 레코드에서 알람 이벤트를 추출해주는 함수 - 나머지 레코드는 무시된다."]
    pub fn from_envelope(envelope: &SnsEnvelope) -> Result<Self, anyhow::Error> {
        let record: &SnsRecord = envelope
            .records()
            .first()
            .ok_or_else(|| anyhow!("[AlarmEvent->from_envelope] The envelope contains no record."))?;

        let alarm_event: AlarmEvent = serde_json::from_str(record.sns().message()).context(
            "[AlarmEvent->from_envelope] The notification message is not a valid alarm state change.",
        )?;

        Ok(alarm_event)
    }

    pub fn is_alarm_state(&self) -> bool {
        self.new_state_value == "ALARM"
    }

    #[doc = "'oldState → newState' 형식의 상태 전이 문자열"]
    pub fn status_transition(&self) -> String {
        format!("{} → {}", self.old_state_value, self.new_state_value)
    }

    pub fn description_text(&self) -> &str {
        self.alarm_description
            .as_deref()
            .unwrap_or(DESCRIPTION_PLACEHOLDER)
    }

    pub fn state_change_time_iso(&self) -> String {
        convert_date_to_str_iso_millis(self.state_change_time, Utc)
    }
}
