use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Describes one aspect of the current state of a workflow operator resource.
///
/// Every resource in this crate reports a list of these in its status
/// subresource.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of this condition.
    #[serde(rename = "type")]
    pub type_: String,

    /// Status of this condition.
    pub status: ConditionStatus,

    /// The last time this condition transitioned from one status to another.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<Time>,

    /// A one-word, CamelCase reason for the last transition of this condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// A human readable message indicating details about the last transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Whether a [`Condition`] currently applies, in the three-valued Kubernetes
/// sense.
//
// Please note that this represents a Kubernetes type, so the name of the enum
// variant needs to exactly match the Kubernetes condition status.
#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize, strum::Display)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_serializes_with_kubernetes_field_names() {
        let condition = Condition {
            type_: "Deployed".to_owned(),
            status: ConditionStatus::True,
            last_transition_time: None,
            reason: None,
            message: Some("workflow instance is running".to_owned()),
        };

        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Deployed",
                "status": "True",
                "message": "workflow instance is running",
            })
        );
    }
}
