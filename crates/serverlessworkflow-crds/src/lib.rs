//! Custom resource type definitions for the Serverless Workflow operator.
//!
//! All resources live in the API group `serverlessworkflow.io` at version
//! `v1alpha2` and are namespaced with a status subresource.
//!
//! # Custom Resources
//!
//! ## [`WorkflowDefinition`](workflow_definition::WorkflowDefinition)
//!
//! A Serverless Workflow instance deployment. Carries the complete workflow
//! model (states, functions, events) inline.
//!
//! ## [`WorkflowResource`](workflow_resource::WorkflowResource)
//!
//! Like a WorkflowDefinition, but referring to an external workflow resource
//! file by URI instead of carrying the model inline.
//!
//! ## [`EventGroup`](event_group::EventGroup)
//!
//! A set of event definitions that WorkflowDefinition instances in the same
//! namespace can consume or produce.
//!
//! ## [`FunctionGroup`](function_group::FunctionGroup)
//!
//! A set of function definitions that WorkflowDefinition instances in the
//! same namespace can call.

pub mod condition;
pub mod event_group;
pub mod function_group;
pub mod workflow;
pub mod workflow_definition;
pub mod workflow_resource;

/// The API group all resources in this crate belong to.
pub const API_GROUP: &str = "serverlessworkflow.io";

/// The API version all resources in this crate are declared at.
pub const API_VERSION: &str = "v1alpha2";
