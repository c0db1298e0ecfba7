use crate::common::*;

#[derive(Serialize, Deserialize, Debug, Getters)]
#[getset(get = "pub")]
pub struct PagerdutyConfig {
    pub api_key: Option<String>,
    pub service_id: Option<String>,
}
