use crate::common::*;

#[doc = "Incoming-webhook payload: one message carrying a single color-coded attachment."]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SlackMessage {
    pub text: String,
    pub attachments: Vec<SlackAttachment>,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SlackAttachment {
    pub color: String,
    pub fields: Vec<SlackField>,
    pub footer: String,
    pub ts: i64,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SlackField {
    pub title: String,
    pub value: String,
    pub short: bool,
}
