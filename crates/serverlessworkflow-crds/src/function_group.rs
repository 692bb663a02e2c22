use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{condition::Condition, workflow::FunctionDef};

/// Defines the structure for a function infrastructure that can be called by
/// a WorkflowDefinition instance.
#[derive(Clone, CustomResource, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    group = "serverlessworkflow.io",
    version = "v1alpha2",
    kind = "FunctionGroup",
    plural = "functiongroups",
    namespaced,
    status = "FunctionGroupStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct FunctionGroupSpec {
    /// List of functions deployed for this instance. A function name must be
    /// unique in the given namespace.
    #[schemars(length(min = 1))]
    pub functions: Vec<FunctionDef>,
}

/// The observed state of a [`FunctionGroup`].
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionGroupStatus {
    /// Current status conditions for the FunctionGroup instance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}
