use crate::common::*;

use crate::enums::urgency_level::*;

#[doc = "Incident-creation request body for the incidents API."]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct IncidentRequest {
    pub incident: Incident,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct Incident {
    #[serde(rename = "type")]
    pub incident_type: String,
    pub title: String,
    pub service: ServiceReference,
    pub urgency: UrgencyLevel,
    pub body: IncidentBody,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ServiceReference {
    pub id: String,
    #[serde(rename = "type")]
    pub reference_type: String,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct IncidentBody {
    #[serde(rename = "type")]
    pub body_type: String,
    pub details: String,
}
