use crate::common::*;

use crate::enums::channel_type::*;

#[derive(Serialize, Deserialize, Debug, Getters)]
#[getset(get = "pub")]
pub struct NotifyConfig {
    pub environment: String,
    pub channel: ChannelType,
}
