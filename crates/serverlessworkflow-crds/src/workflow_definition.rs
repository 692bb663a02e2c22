use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{condition::Condition, workflow::Workflow};

/// Represents a Serverless Workflow instance deployment on a Kubernetes
/// cluster.
///
/// It has every information needed for a Kubernetes native application to
/// deploy a Serverless Workflow instance in the cluster.
#[derive(Clone, CustomResource, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    group = "serverlessworkflow.io",
    version = "v1alpha2",
    kind = "WorkflowDefinition",
    plural = "workflowdefinitions",
    namespaced,
    status = "WorkflowDefinitionStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinitionSpec {
    /// The Serverless Workflow definition deployed by this resource.
    #[serde(flatten)]
    pub workflow: Workflow,
}

/// The observed state of a [`WorkflowDefinition`].
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinitionStatus {
    /// Current status conditions for the WorkflowDefinition instance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}
