use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// Represents a Serverless Workflow instance deployment on a Kubernetes
/// cluster.
///
/// It has a reference for a workflow resource file needed for a Kubernetes
/// native application to deploy a Serverless Workflow instance in the
/// cluster.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    group = "serverlessworkflow.io",
    version = "v1alpha2",
    kind = "WorkflowResource",
    plural = "workflowresources",
    namespaced,
    status = "WorkflowResourceStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResourceSpec {
    /// Resource (URI) for a serverless workflow instance to be deployed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

/// The observed state of a [`WorkflowResource`].
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResourceStatus {
    /// Current status conditions for the WorkflowResource instance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}
