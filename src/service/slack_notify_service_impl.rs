use crate::common::*;

use crate::model::alarm_dto::alarm_event::*;
use crate::model::configs::{notify_config::*, slack_config::*};
use crate::model::handler_response::*;
use crate::model::message_formatter_dto::{message_formatter::*, message_formatter_alarm::*};
use crate::model::slack_dto::slack_message::*;
use crate::model::sns_dto::sns_envelope::*;

use crate::traits::repository::slack_repository::*;
use crate::traits::service::slack_notify_service::*;

#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct SlackNotifyServiceImpl<R: SlackRepository> {
    pub notify_config: Arc<NotifyConfig>,
    pub slack_config: Arc<SlackConfig>,
    pub slack_repo: Arc<R>,
}

impl<R> SlackNotifyServiceImpl<R>
where
    R: SlackRepository + Send + Sync,
{
    #[doc = "추출 -> 변환 -> 전송 순서의 실패 가능 구간. 실패는 notify() 에서 한꺼번에 처리된다."]
    async fn process(&self, webhook_url: &str, envelope: &SnsEnvelope) -> Result<(), anyhow::Error> {
        let alarm_event: AlarmEvent = AlarmEvent::from_envelope(envelope)?;

        let formatter: MessageFormatterAlarm = MessageFormatterAlarm::new(
            alarm_event,
            self.notify_config().environment().to_string(),
        );

        let message: SlackMessage = formatter.get_slack_format();

        self.slack_repo().send_message(webhook_url, &message).await?;

        Ok(())
    }
}

#[async_trait]
impl<R> SlackNotifyService for SlackNotifyServiceImpl<R>
where
    R: SlackRepository + Send + Sync,
{
    #[doc = "알람 이벤트를 Slack 채널로 전달해주는 함수"]
    async fn notify(&self, envelope: &SnsEnvelope) -> HandlerResponse {
        /* Without a webhook there is nothing to do - no extraction, no network call. */
        let webhook_url: &str = match self.slack_config().webhook_url().as_deref() {
            Some(webhook_url) => webhook_url,
            None => {
                error!("[SlackNotifyServiceImpl->notify] 'webhook_url' is not configured.");
                return HandlerResponse::new(500, "Webhook URL not configured".to_string());
            }
        };

        match self.process(webhook_url, envelope).await {
            Ok(_) => {
                info!("Successfully sent Slack notification.");
                HandlerResponse::new(200, "Notification sent to Slack".to_string())
            }
            Err(e) => {
                error!(
                    "[SlackNotifyServiceImpl->notify] Error processing notification: {:?}",
                    e
                );
                HandlerResponse::new(500, "Error processing notification".to_string())
            }
        }
    }
}
