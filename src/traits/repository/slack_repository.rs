use crate::common::*;

use crate::model::slack_dto::slack_message::*;

#[async_trait]
pub trait SlackRepository {
    async fn send_message(
        &self,
        webhook_url: &str,
        message: &SlackMessage,
    ) -> Result<(), anyhow::Error>;
}
