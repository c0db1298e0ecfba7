use crate::common::*;

use crate::model::handler_response::*;
use crate::model::sns_dto::sns_envelope::*;

#[async_trait]
pub trait PagerDutyNotifyService {
    async fn notify(&self, envelope: &SnsEnvelope) -> HandlerResponse;
}
