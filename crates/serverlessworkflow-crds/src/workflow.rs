//! The Serverless Workflow model types embedded by the custom resources.
//!
//! This is the subset of the Serverless Workflow specification the operator
//! deploys: the workflow itself plus the reusable event and function
//! definitions that [`EventGroup`](crate::event_group::EventGroup) and
//! [`FunctionGroup`](crate::function_group::FunctionGroup) group together.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A Serverless Workflow definition.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Workflow unique identifier.
    pub id: String,

    /// Workflow name.
    pub name: String,

    /// Workflow version.
    pub version: String,

    /// Workflow description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Serverless Workflow schema version this definition targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,

    /// Name of the state this workflow starts in. Defaults to the first
    /// declared state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Functions that can be called from the workflow states.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionDef>,

    /// Events consumed or produced by the workflow states.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventDef>,

    /// Workflow control-flow states.
    pub states: Vec<State>,
}

/// One control-flow state of a [`Workflow`].
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Unique state name.
    pub name: String,

    /// The kind of control flow this state performs.
    #[serde(rename = "type")]
    pub type_: StateType,

    /// Whether this state terminates the workflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<bool>,

    /// Name of the state to transition to once this state completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

/// The state types of the Serverless Workflow specification.
#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StateType {
    Event,
    Operation,
    Switch,
    Delay,
    Parallel,
    Inject,
    ForEach,
    Callback,
}

/// An event that workflow instances can consume or produce.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDef {
    /// Unique event name.
    pub name: String,

    /// CloudEvents source of the event.
    pub source: String,

    /// CloudEvents type of the event.
    #[serde(rename = "type")]
    pub type_: String,

    /// Whether workflow instances consume or produce this event. Defaults to
    /// `consumed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,
}

/// The direction of an [`EventDef`] as seen from a workflow instance.
#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Consumed,
    Produced,
}

/// A function that workflow states can call.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    /// Unique function name.
    pub name: String,

    /// The operation the function invokes, for example an OpenAPI operation
    /// URI such as `file://myapis/greetingapis.json#greeting`.
    pub operation: String,

    /// The invocation mechanism of the function. Defaults to `rest`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<FunctionType>,
}

/// The invocation mechanisms of a [`FunctionDef`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FunctionType {
    Rest,
    Rpc,
    Expression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_workflow_deserializes() {
        let workflow: Workflow = serde_yaml::from_str(
            "id: greeting\nname: Greeting Workflow\nversion: '1.0'\nstates:\n  - name: Greet\n    type: operation\n    end: true\n",
        )
        .unwrap();

        assert_eq!(workflow.id, "greeting");
        assert!(workflow.functions.is_empty());
        assert_eq!(workflow.states[0].type_, StateType::Operation);
        assert_eq!(workflow.states[0].end, Some(true));
    }

    #[test]
    fn state_type_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_value(StateType::ForEach).unwrap(),
            serde_json::json!("foreach")
        );
        assert_eq!(StateType::ForEach.to_string(), "foreach");
    }
}
