use crate::common::*;

use crate::model::pagerduty_dto::incident_request::*;

#[async_trait]
pub trait PagerDutyRepository {
    async fn create_incident(
        &self,
        api_key: &str,
        incident: &IncidentRequest,
    ) -> Result<(), anyhow::Error>;
}
