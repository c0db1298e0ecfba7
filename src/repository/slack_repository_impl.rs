use crate::common::*;

use crate::model::slack_dto::slack_message::*;

use crate::traits::repository::slack_repository::*;

/* Client 를 전역적으로 사용하기 위한 변수 선언 */
static REQ_CLIENT: once_lazy<Client> = once_lazy::new(Client::new);

#[derive(Clone, Debug, new)]
pub struct SlackRepositoryImpl;

#[async_trait]
impl SlackRepository for SlackRepositoryImpl {
    #[doc = "Webhook 으로 Slack 메시지를 전송해주는 함수 - 재시도 없이 한 번만 시도한다."]
    async fn send_message(
        &self,
        webhook_url: &str,
        message: &SlackMessage,
    ) -> Result<(), anyhow::Error> {
        let client: &once_lazy<Client> = &REQ_CLIENT;

        let body: Value = serde_json::to_value(message)?;

        let res: reqwest::Response = client
            .post(webhook_url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?;

        /* The incoming-webhook contract reports delivery with 200 only. */
        if res.status().as_u16() == 200 {
            Ok(())
        } else {
            let status: reqwest::StatusCode = res.status();
            let err_text: String = res
                .text()
                .await
                .unwrap_or_else(|_| "Failed to retrieve error message".to_string());
            Err(anyhow!(
                "Slack webhook responded with status {}: {}",
                status,
                err_text
            ))
        }
    }
}
