use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    High,
    Low,
}

impl UrgencyLevel {
    #[doc = "Incident urgency derived from whether the alarm has entered the 'ALARM' state."]
    pub fn from_alarm(is_alarm: bool) -> Self {
        if is_alarm {
            UrgencyLevel::High
        } else {
            UrgencyLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UrgencyLevel::High).unwrap(),
            "\"high\""
        );
        assert_eq!(serde_json::to_string(&UrgencyLevel::Low).unwrap(), "\"low\"");
    }
}
