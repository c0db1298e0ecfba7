use crate::common::*;

use crate::model::pagerduty_dto::incident_request::*;

use crate::traits::repository::pagerduty_repository::*;

pub const PAGERDUTY_API_URL: &str = "https://api.pagerduty.com";

/* Client 를 전역적으로 사용하기 위한 변수 선언 */
static REQ_CLIENT: once_lazy<Client> = once_lazy::new(Client::new);

#[derive(Clone, Debug, new)]
pub struct PagerDutyRepositoryImpl {
    pub base_url: String,
}

#[async_trait]
impl PagerDutyRepository for PagerDutyRepositoryImpl {
    #[doc = "Incidents API 로 incident 생성 요청을 전송해주는 함수 - 재시도 없이 한 번만 시도한다."]
    async fn create_incident(
        &self,
        api_key: &str,
        incident: &IncidentRequest,
    ) -> Result<(), anyhow::Error> {
        let url: String = format!("{}/incidents", self.base_url);

        let body: Value = serde_json::to_value(incident)?;

        let client: &once_lazy<Client> = &REQ_CLIENT;

        let res: reqwest::Response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Token token={}", api_key))
            .header("Accept", "application/vnd.pagerduty+json;version=2")
            .body(body.to_string())
            .send()
            .await?;

        if res.status().is_success() {
            /* The ack body is parsed as a well-formedness check, then dropped. */
            let _ack: Value = res.json().await?;
            Ok(())
        } else {
            let status: reqwest::StatusCode = res.status();
            let err_text: String = res
                .text()
                .await
                .unwrap_or_else(|_| "Failed to retrieve error message".to_string());
            Err(anyhow!(
                "PagerDuty API responded with status {}: {}",
                status,
                err_text
            ))
        }
    }
}
