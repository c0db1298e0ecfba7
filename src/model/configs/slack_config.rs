use crate::common::*;

#[derive(Serialize, Deserialize, Debug, Getters)]
#[getset(get = "pub")]
pub struct SlackConfig {
    pub webhook_url: Option<String>,
}
