use crate::common::*;

#[doc = "Outer event structure delivered to the process. Only the embedded message body is of interest."]
#[derive(Debug, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SnsEnvelope {
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsNotification,
}

#[derive(Debug, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SnsNotification {
    #[serde(rename = "Message")]
    pub message: String,
}
