use crate::common::*;

use crate::model::alarm_dto::alarm_event::*;
use crate::model::configs::{notify_config::*, pagerduty_config::*};
use crate::model::handler_response::*;
use crate::model::message_formatter_dto::{message_formatter::*, message_formatter_alarm::*};
use crate::model::pagerduty_dto::incident_request::*;
use crate::model::sns_dto::sns_envelope::*;

use crate::traits::repository::pagerduty_repository::*;
use crate::traits::service::pagerduty_notify_service::*;

#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct PagerDutyNotifyServiceImpl<R: PagerDutyRepository> {
    pub notify_config: Arc<NotifyConfig>,
    pub pagerduty_config: Arc<PagerdutyConfig>,
    pub pagerduty_repo: Arc<R>,
}

impl<R> PagerDutyNotifyServiceImpl<R>
where
    R: PagerDutyRepository + Send + Sync,
{
    async fn process(
        &self,
        api_key: &str,
        service_id: &str,
        envelope: &SnsEnvelope,
    ) -> Result<(), anyhow::Error> {
        let alarm_event: AlarmEvent = AlarmEvent::from_envelope(envelope)?;

        let formatter: MessageFormatterAlarm = MessageFormatterAlarm::new(
            alarm_event,
            self.notify_config().environment().to_string(),
        );

        let incident: IncidentRequest = formatter.get_pagerduty_format(service_id);

        self.pagerduty_repo()
            .create_incident(api_key, &incident)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl<R> PagerDutyNotifyService for PagerDutyNotifyServiceImpl<R>
where
    R: PagerDutyRepository + Send + Sync,
{
    #[doc = "알람 이벤트를 PagerDuty incident 로 전달해주는 함수"]
    async fn notify(&self, envelope: &SnsEnvelope) -> HandlerResponse {
        /* Both credentials are needed before anything else happens. */
        let (api_key, service_id): (&str, &str) = match (
            self.pagerduty_config().api_key().as_deref(),
            self.pagerduty_config().service_id().as_deref(),
        ) {
            (Some(api_key), Some(service_id)) => (api_key, service_id),
            _ => {
                error!(
                    "[PagerDutyNotifyServiceImpl->notify] 'api_key' or 'service_id' is not configured."
                );
                return HandlerResponse::new(500, "PagerDuty credentials not configured".to_string());
            }
        };

        match self.process(api_key, service_id, envelope).await {
            Ok(_) => {
                info!("Successfully sent PagerDuty notification.");
                HandlerResponse::new(200, "Notification sent to PagerDuty".to_string())
            }
            Err(e) => {
                error!(
                    "[PagerDutyNotifyServiceImpl->notify] Error processing notification: {:?}",
                    e
                );
                HandlerResponse::new(500, "Error processing notification".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::enums::channel_type::*;
    use crate::repository::pagerduty_repository_impl::*;

    #[derive(Debug, Default)]
    struct CountingPagerDutyRepository {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PagerDutyRepository for CountingPagerDutyRepository {
        async fn create_incident(
            &self,
            _api_key: &str,
            _incident: &IncidentRequest,
        ) -> Result<(), anyhow::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn notify_config() -> Arc<NotifyConfig> {
        Arc::new(NotifyConfig {
            environment: "prod".to_string(),
            channel: ChannelType::Pagerduty,
        })
    }

    fn pagerduty_config(api_key: Option<&str>, service_id: Option<&str>) -> Arc<PagerdutyConfig> {
        Arc::new(PagerdutyConfig {
            api_key: api_key.map(|key| key.to_string()),
            service_id: service_id.map(|id| id.to_string()),
        })
    }

    fn sample_envelope(new_state: &str) -> SnsEnvelope {
        let message: String = json!({
            "AlarmName": "cpu-high",
            "AlarmDescription": "CPU too high",
            "OldStateValue": "OK",
            "NewStateValue": new_state,
            "StateChangeTime": "2024-01-15T10:30:00.000Z"
        })
        .to_string();

        serde_json::from_value(json!({"Records": [{"Sns": {"Message": message}}]})).unwrap()
    }

    #[tokio::test]
    async fn missing_api_key_returns_500_without_sending() {
        let repo: Arc<CountingPagerDutyRepository> =
            Arc::new(CountingPagerDutyRepository::default());
        let service: PagerDutyNotifyServiceImpl<CountingPagerDutyRepository> =
            PagerDutyNotifyServiceImpl::new(
                notify_config(),
                pagerduty_config(None, Some("SVC123")),
                Arc::clone(&repo),
            );

        let response: HandlerResponse = service.notify(&sample_envelope("ALARM")).await;
        assert_eq!(*response.status_code(), 500);
        assert_eq!(response.body(), "PagerDuty credentials not configured");
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_service_id_returns_500_without_sending() {
        let repo: Arc<CountingPagerDutyRepository> =
            Arc::new(CountingPagerDutyRepository::default());
        let service: PagerDutyNotifyServiceImpl<CountingPagerDutyRepository> =
            PagerDutyNotifyServiceImpl::new(
                notify_config(),
                pagerduty_config(Some("pd-key"), None),
                Arc::clone(&repo),
            );

        let response: HandlerResponse = service.notify(&sample_envelope("ALARM")).await;
        assert_eq!(*response.status_code(), 500);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn created_incident_returns_200() {
        let repo: Arc<CountingPagerDutyRepository> =
            Arc::new(CountingPagerDutyRepository::default());
        let service: PagerDutyNotifyServiceImpl<CountingPagerDutyRepository> =
            PagerDutyNotifyServiceImpl::new(
                notify_config(),
                pagerduty_config(Some("pd-key"), Some("SVC123")),
                Arc::clone(&repo),
            );

        let response: HandlerResponse = service.notify(&sample_envelope("ALARM")).await;
        assert_eq!(*response.status_code(), 200);
        assert_eq!(response.body(), "Notification sent to PagerDuty");
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    fn api_service(base_url: &str) -> PagerDutyNotifyServiceImpl<PagerDutyRepositoryImpl> {
        PagerDutyNotifyServiceImpl::new(
            notify_config(),
            pagerduty_config(Some("pd-key"), Some("SVC123")),
            Arc::new(PagerDutyRepositoryImpl::new(base_url.to_string())),
        )
    }

    #[tokio::test]
    async fn incident_request_carries_auth_headers_and_urgency() {
        let mock_server: MockServer = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/incidents"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", "Token token=pd-key"))
            .and(header("Accept", "application/vnd.pagerduty+json;version=2"))
            .and(body_partial_json(json!({
                "incident": {
                    "type": "incident",
                    "urgency": "high",
                    "service": {"id": "SVC123", "type": "service_reference"}
                }
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"incident": {"id": "PD001"}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let service: PagerDutyNotifyServiceImpl<PagerDutyRepositoryImpl> =
            api_service(&mock_server.uri());

        let response: HandlerResponse = service.notify(&sample_envelope("ALARM")).await;
        assert_eq!(*response.status_code(), 200);
    }

    #[tokio::test]
    async fn any_2xx_ack_maps_to_200() {
        let mock_server: MockServer = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/incidents"))
            .and(body_partial_json(json!({"incident": {"urgency": "low"}})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"incident": {"id": "PD002"}})),
            )
            .mount(&mock_server)
            .await;

        let service: PagerDutyNotifyServiceImpl<PagerDutyRepositoryImpl> =
            api_service(&mock_server.uri());

        let response: HandlerResponse = service.notify(&sample_envelope("OK")).await;
        assert_eq!(*response.status_code(), 200);
    }

    #[tokio::test]
    async fn upstream_error_status_maps_to_500() {
        let mock_server: MockServer = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&mock_server)
            .await;

        let service: PagerDutyNotifyServiceImpl<PagerDutyRepositoryImpl> =
            api_service(&mock_server.uri());

        let response: HandlerResponse = service.notify(&sample_envelope("ALARM")).await;
        assert_eq!(*response.status_code(), 500);
        assert_eq!(response.body(), "Error processing notification");
    }

    #[tokio::test]
    async fn connection_refused_maps_to_500() {
        let service: PagerDutyNotifyServiceImpl<PagerDutyRepositoryImpl> =
            api_service("http://127.0.0.1:1");

        let response: HandlerResponse = service.notify(&sample_envelope("ALARM")).await;
        assert_eq!(*response.status_code(), 500);
        assert_eq!(response.body(), "Error processing notification");
    }
}
