use crate::common::*;

use crate::traits::service::{pagerduty_notify_service::*, slack_notify_service::*};

use crate::model::configs::notify_config::*;
use crate::model::handler_response::*;
use crate::model::sns_dto::sns_envelope::*;

use crate::enums::channel_type::*;

use crate::utils_modules::io_utils::*;

#[derive(Debug, new)]
pub struct MainController<S: SlackNotifyService, P: PagerDutyNotifyService> {
    notify_config: Arc<NotifyConfig>,
    slack_service: Arc<S>,
    pagerduty_service: Arc<P>,
}

impl<S, P> MainController<S, P>
where
    S: SlackNotifyService + Send + Sync + 'static,
    P: PagerDutyNotifyService + Send + Sync + 'static,
{
    #[doc = "Reads one alarm envelope from standard input and forwards it to the configured channel(s)."]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let envelope: SnsEnvelope = read_json_from_stdin::<SnsEnvelope>()
            .context("[MainController->main_task] Failed to read the alarm envelope.")?;

        let channel: ChannelType = *self.notify_config.channel();
        info!("Delivery channel: {}", channel.get_name());

        let responses: Vec<(&str, HandlerResponse)> = match channel {
            ChannelType::Slack => vec![("slack", self.slack_service.notify(&envelope).await)],
            ChannelType::Pagerduty => {
                vec![("pagerduty", self.pagerduty_service.notify(&envelope).await)]
            }
            ChannelType::All => {
                /* The two deliveries are independent of each other, so they run concurrently. */
                let (slack_res, pagerduty_res) = join!(
                    self.slack_service.notify(&envelope),
                    self.pagerduty_service.notify(&envelope)
                );
                vec![("slack", slack_res), ("pagerduty", pagerduty_res)]
            }
        };

        let mut failed_cnt: usize = 0;

        for (channel_name, response) in &responses {
            if response.is_success() {
                info!(
                    "[{}] Delivery finished: {} - {}",
                    channel_name,
                    response.status_code(),
                    response.body()
                );
            } else {
                error!(
                    "[{}] Delivery failed: {} - {}",
                    channel_name,
                    response.status_code(),
                    response.body()
                );
                failed_cnt += 1;
            }
        }

        if failed_cnt > 0 {
            return Err(anyhow!(
                "[MainController->main_task] {} of {} deliveries failed.",
                failed_cnt,
                responses.len()
            ));
        }

        Ok(())
    }
}
