use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{condition::Condition, workflow::EventDef};

/// Defines the structure for an event infrastructure that can be consumed or
/// produced by a WorkflowDefinition instance.
#[derive(Clone, CustomResource, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    group = "serverlessworkflow.io",
    version = "v1alpha2",
    kind = "EventGroup",
    plural = "eventgroups",
    namespaced,
    status = "EventGroupStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct EventGroupSpec {
    /// List of events deployed for this instance. An event name must be
    /// unique in the given namespace.
    #[schemars(length(min = 1))]
    pub events: Vec<EventDef>,
}

/// The observed state of an [`EventGroup`].
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGroupStatus {
    /// Current status conditions for the EventGroup instance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}
