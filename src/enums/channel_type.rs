use crate::common::*;

#[doc = "Destination channel(s) this process forwards alarm events to."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Slack,
    Pagerduty,
    All,
}

impl ChannelType {
    pub fn get_name(&self) -> String {
        match self {
            ChannelType::Slack => "slack",
            ChannelType::Pagerduty => "pagerduty",
            ChannelType::All => "all",
        }
        .to_string()
    }
}
